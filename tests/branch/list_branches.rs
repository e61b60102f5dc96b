use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn list_branches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for name in ["feature", "bugfix"] {
        run_minigit_command(dir, &["branch", name])
            .assert()
            .success();
    }

    run_minigit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::diff("  bugfix\n  feature\n* main\n"));
}
