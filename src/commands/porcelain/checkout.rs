use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryResult;
use tracing::debug;

impl Repository {
    /// Restore the files of `target`'s tip into the working tree and make it current.
    ///
    /// Every blob is loaded and every target path checked before the first file is
    /// written, so a missing object or a file standing where a directory is needed
    /// leaves both the working tree and the current branch untouched. An I/O failure
    /// while writing can still leave the tree partly restored. Files that are not part
    /// of the target manifest are left alone.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let target = BranchName::try_parse(target)?;
        let target_oid = self.refs().resolve(&target)?;
        let already_current = self.refs().is_current_branch(&target)?;

        if let Some(target_oid) = target_oid {
            let commit = self.commit_log().load(&target_oid)?;

            let files = commit
                .manifest()
                .iter()
                .map(|(path, oid)| Ok((path, self.database().load(oid)?)))
                .collect::<RepositoryResult<Vec<_>>>()?;
            for (path, _) in &files {
                self.workspace().check_writable(path)?;
            }

            for (path, content) in files {
                self.workspace().write_file(path, &content)?;
                debug!(path = %path, "restored file");
            }
        }

        self.refs().set_current(&target)?;

        if already_current {
            writeln!(self.writer(), "Already on '{}'", target)?;
        } else {
            writeln!(self.writer(), "Switched to branch '{}'", target)?;
        }

        Ok(())
    }
}
