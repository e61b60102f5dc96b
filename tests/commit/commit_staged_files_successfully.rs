use crate::common::command::{branch_tip, init_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[rstest]
fn commit_staged_files_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let metadata = dir.join(".minigit");

    let tip = branch_tip(dir, "main")?.ok_or("main has no commits")?;
    let log = fs::read_to_string(metadata.join("commits.txt"))?;
    let lines = log.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], format!("COMMIT {tip}"));
    assert_eq!(lines[1], "TIME 2023-01-01T12:00:00+00:00");
    assert_eq!(lines[2], "MESSAGE Initial commit");
    assert_eq!(lines[3], "PARENT ");
    assert_eq!(
        lines[4..7]
            .iter()
            .map(|line| line.split_once(':').map(|(file, _)| file).unwrap_or_default())
            .collect::<Vec<_>>(),
        vec!["FILE 1.txt", "FILE a/2.txt", "FILE a/b/3.txt"]
    );
    assert_eq!(lines[7], "END");

    // the staging area is emptied by the commit
    assert_eq!(fs::read_to_string(metadata.join("staging.txt"))?, "");

    Ok(())
}
