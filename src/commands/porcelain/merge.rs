use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::two_way::{MergeOutcome, TwoWayMerge};
use crate::errors::{ObjectKind, RepositoryError};
use colored::Colorize;
use tracing::{info, warn};

impl Repository {
    /// Merge the tip of `target` into the current branch.
    ///
    /// The merge commit is always written. Paths that differ on both sides keep the
    /// current branch's version and are reported in the outcome.
    pub fn merge(&mut self, target: &str) -> anyhow::Result<MergeOutcome> {
        let target_branch = BranchName::try_parse(target)?;
        let (current_branch, current_oid) = self.refs().current_tip()?;
        let target_oid = self.refs().resolve(&target_branch)?;

        let current_oid = current_oid.ok_or_else(|| {
            RepositoryError::not_found(ObjectKind::Commit, format!("tip of {current_branch}"))
        })?;
        let target_oid = target_oid.ok_or_else(|| {
            RepositoryError::not_found(ObjectKind::Commit, format!("tip of {target_branch}"))
        })?;

        let graph = self.commit_log().load_all()?;
        let current = graph.load(&current_oid)?;
        let target_commit = graph.load(&target_oid)?;

        let outcome =
            TwoWayMerge::new(current, target_commit, &target_branch).merge(self.config().now());

        self.commit_log().append(&outcome.commit)?;
        self.refs()
            .advance(&current_branch, Some(&current_oid), outcome.commit.id())?;

        for path in &outcome.conflicts {
            warn!(path = %path, branch = %target_branch, "merge conflict, kept current version");
            writeln!(
                self.writer(),
                "{} both modified {}",
                "CONFLICT:".red(),
                path
            )?;
        }

        info!(
            commit = %outcome.commit.id(),
            into = %current_branch,
            from = %target_branch,
            conflicts = outcome.conflicts.len(),
            "merged branch"
        );
        writeln!(
            self.writer(),
            "Merge complete! Commit ID: {}",
            outcome.commit.id().to_string().yellow()
        )?;

        Ok(outcome)
    }
}
