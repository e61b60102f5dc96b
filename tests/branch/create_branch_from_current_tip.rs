use crate::common::command::{branch_tip, init_repository_dir, repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_from_current_tip(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Created branch 'feature' at {}\n",
            &tip[..7]
        )));

    assert_eq!(branch_tip(dir, "feature")?, Some(tip));

    Ok(())
}

#[rstest]
fn create_branch_before_first_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Created branch 'feature' with no commits\n",
        ));

    assert_eq!(branch_tip(dir, "feature")?, None);

    Ok(())
}
