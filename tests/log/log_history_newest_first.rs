use crate::common::command::{branch_tip, commit_file, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_history_newest_first(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    commit_file(dir, "1.txt", "uno", "Second commit");
    let second = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    let output = run_minigit_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date:   Sun Jan 1 12:00:00 2023 +0000"))
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let second_at = output.find(&format!("commit {second}")).ok_or("second missing")?;
    let first_at = output.find(&format!("commit {first}")).ok_or("first missing")?;
    assert!(second_at < first_at);

    Ok(())
}

#[rstest]
fn log_oneline(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    commit_file(dir, "1.txt", "uno", "Second commit");
    let second = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    let output = run_minigit_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8(output)?,
        format!(
            "{} Second commit\n{} Initial commit\n",
            &second[..7],
            &first[..7]
        )
    );

    Ok(())
}
