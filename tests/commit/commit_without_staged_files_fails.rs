use crate::common::command::{branch_tip, init_repository_dir, minigit_commit, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_without_staged_files_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "main")?;

    minigit_commit(dir, "Nothing to see")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing staged to commit"));

    assert_eq!(branch_tip(dir, "main")?, tip);

    Ok(())
}

#[rstest]
fn commit_with_blank_message_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("1.txt"), "changed")?;
    run_minigit_command(dir, &["add", "1.txt"]).assert().success();

    minigit_commit(dir, "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("commit message"));

    Ok(())
}
