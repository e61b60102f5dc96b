use crate::common::command::{init_repository_dir, repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_minigit_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn merge_unknown_branch_fails(init_repository_dir: TempDir) {
    run_minigit_command(init_repository_dir.path(), &["merge", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nope' not found"));
}
