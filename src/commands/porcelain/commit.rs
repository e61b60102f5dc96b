use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryError;
use colored::Colorize;
use tracing::info;

impl Repository {
    /// Record the staged files as a new commit on the current branch.
    ///
    /// The commit is durable in the log before the branch moves, and the staging
    /// area is cleared only once both have succeeded.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Commit> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(RepositoryError::EmptyInput("commit message".to_string()).into());
        }

        let mut index = self.index();

        // Load the staging file from the disk
        index.rehydrate()?;
        let manifest = index.materialize()?;

        let (branch, parent) = self.refs().current_tip()?;
        if let Some(parent) = &parent {
            // the branch must never point at a commit missing from the log
            self.commit_log().load(parent)?;
        }
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(
            parent.clone().into_iter().collect(),
            manifest,
            message,
            self.config().now(),
        );
        self.commit_log().append(&commit)?;
        self.refs().advance(&branch, parent.as_ref(), commit.id())?;

        index.clear();
        index.write_updates()?;

        info!(commit = %commit.id(), branch = %branch, files = commit.manifest().len(), "created commit");
        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            branch,
            is_root,
            commit.id().to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(commit)
    }
}
