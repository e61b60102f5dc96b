use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Commits reachable from the current branch's tip through first parents, newest first
    pub fn history(&self) -> anyhow::Result<Vec<Commit>> {
        let (_, tip) = self.refs().current_tip()?;
        let Some(tip) = tip else {
            return Ok(Vec::new());
        };

        let graph = self.commit_log().load_all()?;
        let commits = graph
            .ancestors(&tip)
            .map(|commit| commit.cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(commits)
    }

    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let (branch, tip) = self.refs().current_tip()?;
        let Some(tip) = tip else {
            writeln!(self.writer(), "No commits found on branch '{branch}'.")?;
            return Ok(());
        };

        let graph = self.commit_log().load_all()?;

        // print as we walk so the commits before a missing parent are still shown
        for (position, commit) in graph.ancestors(&tip).enumerate() {
            let commit = commit?;

            if opts.oneline {
                self.show_commit_oneline(commit)?;
            } else {
                if position > 0 {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(commit)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.id()).yellow()
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(|parent| parent.to_short_oid())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer(), "Merge: {parents}")?;
        }
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.id().to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
