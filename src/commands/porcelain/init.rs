use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{ObjectKind, RepositoryError};
use anyhow::Context;
use std::fs;
use tracing::info;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        let metadata_path = self.config().metadata_path();
        if self.is_initialized() {
            return Err(RepositoryError::already_exists(
                ObjectKind::Repository,
                metadata_path.display(),
            )
            .into());
        }

        let default_branch = BranchName::try_parse(self.config().default_branch.clone())
            .context("Invalid default branch name")?;

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;

        fs::write(self.commit_log().path(), b"")
            .context("Failed to create .minigit/commits.txt file")?;

        self.refs()
            .write_initial(&default_branch)
            .context("Failed to create the initial branch table")?;

        fs::write(self.index().path(), b"")
            .context("Failed to create .minigit/staging.txt file")?;

        info!(path = %metadata_path.display(), branch = %default_branch, "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty minigit repository in {}",
            metadata_path.display()
        )?;

        Ok(())
    }
}
