use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_algorithm::Edit;
use crate::artifacts::diff::manifest_diff::{FileChange, diff_manifests};
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Only list the paths that differ, with their status letter
    pub name_only: bool,
}

/// One path of a commit comparison, with its line edits when the content changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: String,
    pub change: FileChange,
    pub edits: Vec<Edit<String>>,
}

impl Repository {
    /// Compare the manifests of two commits given by full or abbreviated id
    pub fn diff_commits(&self, a: &str, b: &str) -> anyhow::Result<Vec<FileDiff>> {
        let graph = self.commit_log().load_all()?;
        let a = graph.load(&graph.resolve_prefix(a)?)?;
        let b = graph.load(&graph.resolve_prefix(b)?)?;

        diff_manifests(a.manifest(), b.manifest())
            .into_iter()
            .map(|(path, change)| -> anyhow::Result<FileDiff> {
                let edits = match &change {
                    FileChange::Changed { a, b } => {
                        let a_lines = self.database().load_blob(a)?.lines();
                        let b_lines = self.database().load_blob(b)?.lines();

                        self.config().diff_algorithm.diff_lines(&a_lines, &b_lines)
                    }
                    _ => Vec::new(),
                };

                Ok(FileDiff {
                    path,
                    change,
                    edits,
                })
            })
            .collect()
    }

    pub fn diff(&self, a: &str, b: &str, opts: &DiffOptions) -> anyhow::Result<()> {
        let file_diffs = self.diff_commits(a, b)?;

        if opts.name_only {
            for file_diff in file_diffs.iter().filter(|f| !f.change.is_unchanged()) {
                writeln!(
                    self.writer(),
                    "{}\t{}",
                    file_diff.change.status_letter(),
                    file_diff.path
                )?;
            }
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("Comparing {a} and {b}").bold()
        )?;

        for file_diff in &file_diffs {
            self.print_file_diff(file_diff, b)?;
        }

        Ok(())
    }

    fn print_file_diff(&self, file_diff: &FileDiff, b: &str) -> anyhow::Result<()> {
        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{}",
            format!("File: {}", file_diff.path).bold()
        )?;

        match &file_diff.change {
            FileChange::AddedInB(_) => {
                writeln!(self.writer(), "{}", format!("+ Added in commit {b}").green())?;
            }
            FileChange::RemovedInB(_) => {
                writeln!(self.writer(), "{}", format!("- Removed in commit {b}").red())?;
            }
            FileChange::Unchanged(_) => {
                writeln!(self.writer(), "No changes.")?;
            }
            FileChange::Changed { a, b } => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!("index {}..{}", a.to_short_oid(), b.to_short_oid()).cyan()
                )?;
                for edit in file_diff.edits.iter().filter(|edit| edit.is_change()) {
                    self.print_diff_edit(edit)?;
                }
            }
        }

        Ok(())
    }

    fn print_diff_edit(&self, edit: &Edit<String>) -> anyhow::Result<()> {
        match edit {
            Edit::Delete { .. } => writeln!(self.writer(), "{}", edit.as_string().red())?,
            Edit::Insert { .. } => writeln!(self.writer(), "{}", edit.as_string().green())?,
            Edit::Equal { .. } => writeln!(self.writer(), "{}", edit)?,
        }

        Ok(())
    }
}
