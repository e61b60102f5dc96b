use crate::common::command::{
    branch_tip, commit_file, init_repository_dir, minigit_commit, run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_links_parent(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_minigit_command(dir, &["add", "1.txt"]).assert().success();
    minigit_commit(dir, "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[main [0-9a-f]{7}\] Second commit\n$")?);

    let second = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    assert_ne!(first, second);

    let log = std::fs::read_to_string(dir.join(".minigit").join("commits.txt"))?;
    assert!(log.contains(&format!("COMMIT {second}\n")));
    assert!(log.contains(&format!("PARENT {first}\n")));

    commit_file(dir, "2.txt", "dos", "Third commit");
    assert_ne!(branch_tip(dir, "main")?, Some(second));

    Ok(())
}
