use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectKind, RepositoryError, RepositoryResult};
use std::collections::HashSet;

/// Lazy first-parent walk, newest first.
///
/// The walk ends after the root commit. A parent id missing from the graph is
/// yielded once as a `NotFound` error and ends the walk. A commit seen twice is
/// reported as `Malformed` instead of looping.
#[derive(Debug, Clone)]
pub struct Ancestors<'g> {
    graph: &'g CommitGraph,
    current_commit_oid: Option<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl<'g> Ancestors<'g> {
    pub fn new(graph: &'g CommitGraph, start: Option<ObjectId>) -> Self {
        Ancestors {
            graph,
            current_commit_oid: start,
            seen: HashSet::new(),
        }
    }
}

impl<'g> Iterator for Ancestors<'g> {
    type Item = RepositoryResult<&'g Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        if !self.seen.insert(commit_oid.clone()) {
            return Some(Err(RepositoryError::malformed(
                "commit graph",
                0,
                format!("cycle detected at commit {commit_oid}"),
            )));
        }

        match self.graph.get(&commit_oid) {
            Some(commit) => {
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(commit))
            }
            None => Some(Err(RepositoryError::not_found(
                ObjectKind::Commit,
                commit_oid,
            ))),
        }
    }
}
