use crate::common::command::{branch_tip, commit_file, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

fn two_commits(dir: &Path, before: &str, after: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    commit_file(dir, "story.txt", before, "Draft story");
    let first = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    commit_file(dir, "story.txt", after, "Revise story");
    let second = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    Ok((first, second))
}

#[rstest]
fn diff_between_commits(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let (first, second) = two_commits(dir, "once\nupon\na time", "once\nupon\nthe time")?;

    run_minigit_command(dir, &["diff", &first, &second])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Comparing {first} and {second}\n\nFile: story.txt\n"
        )))
        .stdout(predicate::str::contains("- a time\n+ the time\n"))
        .stdout(predicate::str::contains("- once").not());

    Ok(())
}

#[rstest]
fn diff_with_abbreviated_ids_and_name_only(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let initial = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    commit_file(dir, "extra.txt", "extra", "Add extra");
    let second = branch_tip(dir, "main")?.ok_or("main has no commits")?;

    // the second commit only carries what was staged for it
    run_minigit_command(dir, &["diff", &initial[..8], &second[..8], "--name-only"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "D\t1.txt\nD\ta/2.txt\nD\ta/b/3.txt\nA\textra.txt\n",
        ));

    Ok(())
}

#[rstest]
fn diff_with_lockstep_algorithm(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let (first, second) = two_commits(dir, "one\ntwo", "zero\none\ntwo")?;

    run_minigit_command(dir, &["diff", &first, &second, "--diff-algorithm", "lockstep"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- one\n+ zero\n- two\n+ one\n+ two\n",
        ));

    run_minigit_command(dir, &["diff", &first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ zero\n"))
        .stdout(predicate::str::contains("- one").not());

    Ok(())
}
