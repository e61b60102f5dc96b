use crate::common::command::{branch_tip, commit_file, repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const HELLO_OID: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
const WORLD_OID: &str = "7c211433f02071597741e6ff5a8ea34789abbf43";

#[rstest]
fn branch_diff_merge_roundtrip(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    commit_file(dir, "a.txt", "hello", "Say hello");
    let c1 = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    assert_eq!(branch_tip(dir, "feature")?, Some(c1.clone()));

    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "world", "Say world");
    let c2 = branch_tip(dir, "feature")?.ok_or("feature has no commits")?;
    assert_ne!(c1, c2);

    run_minigit_command(dir, &["diff", &c1, &c2, "--name-only"])
        .assert()
        .success()
        .stdout(predicate::str::diff("M\ta.txt\n"));
    run_minigit_command(dir, &["diff", &c1, &c2])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "index {}..{}\n- hello\n+ world\n",
            &HELLO_OID[..7],
            &WORLD_OID[..7]
        )));

    run_minigit_command(dir, &["checkout", "main"])
        .assert()
        .success();
    run_minigit_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CONFLICT: both modified a.txt\n"));

    let merge_tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    let log = std::fs::read_to_string(dir.join(".minigit").join("commits.txt"))?;
    let record = log
        .split_once(&format!("COMMIT {merge_tip}\n"))
        .map(|(_, rest)| rest)
        .ok_or("merge commit missing from log")?;

    assert!(record.contains(&format!("FILE a.txt:{HELLO_OID}\n")));
    assert!(record.contains(&format!("PARENT {c1}\nPARENT {c2}\n")));

    Ok(())
}
