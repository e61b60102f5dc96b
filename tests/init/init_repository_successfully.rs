use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[rstest]
fn init_repository_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty minigit repository in",
        ));

    let metadata = repository_dir.path().join(".minigit");
    assert!(metadata.join("objects").is_dir());
    assert_eq!(fs::read_to_string(metadata.join("commits.txt"))?, "");
    assert_eq!(fs::read_to_string(metadata.join("branches.txt"))?, "main:\n");
    assert_eq!(fs::read_to_string(metadata.join("HEAD.txt"))?, "main\n");
    assert_eq!(fs::read_to_string(metadata.join("staging.txt"))?, "");

    Ok(())
}

#[rstest]
fn init_repository_with_default_branch_from_env(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .env("MINIGIT_DEFAULT_BRANCH", "trunk")
        .assert()
        .success();

    let metadata = repository_dir.path().join(".minigit");
    assert_eq!(fs::read_to_string(metadata.join("branches.txt"))?, "trunk:\n");
    assert_eq!(fs::read_to_string(metadata.join("HEAD.txt"))?, "trunk\n");

    Ok(())
}
