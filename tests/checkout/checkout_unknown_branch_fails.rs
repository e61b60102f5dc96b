use crate::common::command::{current_branch, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_unknown_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_minigit_command(dir, &["checkout", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nope' not found"));

    assert_eq!(current_branch(dir)?, "main");

    Ok(())
}
