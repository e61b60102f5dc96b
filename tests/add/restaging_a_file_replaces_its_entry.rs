use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restaging_a_file_replaces_its_entry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_minigit_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_minigit_command(dir, &["add", "a.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "world".to_string()));
    run_minigit_command(dir, &["add", "a.txt"]).assert().success();

    let staging = std::fs::read_to_string(dir.join(".minigit").join("staging.txt"))?;
    assert_eq!(
        staging,
        "a.txt:7c211433f02071597741e6ff5a8ea34789abbf43\n"
    );

    Ok(())
}
