use crate::common::command::{branch_tip, commit_file, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_disjoint_branches(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "feature.txt", "feature", "Add feature");
    let feature_tip = branch_tip(dir, "feature")?.ok_or("feature has no commits")?;

    run_minigit_command(dir, &["checkout", "main"])
        .assert()
        .success();
    commit_file(dir, "main.txt", "main", "Add main");
    let main_tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    run_minigit_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Merge complete! Commit ID: "))
        .stdout(predicate::str::contains("CONFLICT").not());

    let merge_tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    let log = std::fs::read_to_string(dir.join(".minigit").join("commits.txt"))?;
    let record = log
        .split_once(&format!("COMMIT {merge_tip}\n"))
        .map(|(_, rest)| rest)
        .ok_or("merge commit missing from log")?;
    let record = record.split_once("END\n").map(|(body, _)| body).unwrap_or(record);

    assert!(record.contains("MESSAGE Merged branch 'feature'\n"));
    assert!(record.contains(&format!("PARENT {main_tip}\nPARENT {feature_tip}\n")));
    assert!(record.contains("FILE feature.txt:"));
    assert!(record.contains("FILE main.txt:"));
    // the feature branch itself does not move
    assert_eq!(branch_tip(dir, "feature")?, Some(feature_tip));

    Ok(())
}
