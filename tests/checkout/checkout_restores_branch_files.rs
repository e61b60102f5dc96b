use crate::common::command::{commit_file, current_branch, init_repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_restores_branch_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Switched to branch 'feature'\n"));
    commit_file(dir, "a/2.txt", "deux", "Translate two");

    run_minigit_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Switched to branch 'main'\n"));

    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(current_branch(dir)?, "main");

    Ok(())
}

#[rstest]
fn checkout_twice_is_idempotent(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("b").join("3.txt"), "local".to_string()));
    write_file(FileSpec::new(dir.join("untracked.txt"), "mine".to_string()));

    run_minigit_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Already on 'main'\n"));
    run_minigit_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Already on 'main'\n"));

    assert_eq!(read_file(&dir.join("a").join("b").join("3.txt")), "three");
    assert_eq!(read_file(&dir.join("untracked.txt")), "mine");
    assert_eq!(current_branch(dir)?, "main");

    Ok(())
}
