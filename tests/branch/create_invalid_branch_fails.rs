use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'feature' already exists"));
}

#[rstest]
#[case("bad:name")]
#[case("")]
fn create_invalid_branch_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_minigit_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid name"));
}
