use crate::common::command::{branch_tip, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn diff_unknown_commit_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    run_minigit_command(dir, &["diff", &tip, "0000000000000000000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
fn diff_with_too_short_id_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    run_minigit_command(dir, &["diff", &tip[..3], &tip])
        .assert()
        .failure();

    Ok(())
}
