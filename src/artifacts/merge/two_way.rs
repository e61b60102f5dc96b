use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::manifest::Manifest;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub commit: Commit,
    /// Paths present on both sides with different blobs
    pub conflicts: BTreeSet<String>,
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

pub fn merge_message(target_branch: &BranchName) -> String {
    format!("Merged branch '{target_branch}'")
}

#[derive(Debug, Clone, new)]
pub struct TwoWayMerge<'m> {
    current: &'m Commit,
    target: &'m Commit,
    target_branch: &'m BranchName,
}

impl TwoWayMerge<'_> {
    /// Combined manifest and the conflicting paths, current branch wins every conflict
    pub fn merge_manifests(&self) -> (Manifest, BTreeSet<String>) {
        let mut merged = self.current.manifest().clone();
        let mut conflicts = BTreeSet::new();

        for (path, target_oid) in self.target.manifest() {
            match merged.get(path) {
                None => {
                    merged.insert(path.clone(), target_oid.clone());
                }
                Some(current_oid) if current_oid == target_oid => {}
                Some(_) => {
                    conflicts.insert(path.clone());
                }
            }
        }

        (merged, conflicts)
    }

    /// Build the merge commit on top of the current commit.
    ///
    /// The target tip is recorded as a second parent unless both tips are the same commit.
    pub fn merge(&self, timestamp: DateTime<FixedOffset>) -> MergeOutcome {
        let (manifest, conflicts) = self.merge_manifests();

        let mut parents = vec![self.current.id().clone()];
        if self.target.id() != self.current.id() {
            parents.push(self.target.id().clone());
        }

        let commit = Commit::new(
            parents,
            manifest,
            merge_message(self.target_branch),
            timestamp,
        );

        MergeOutcome { commit, conflicts }
    }
}
