use crate::artifacts::log::rev_list::Ancestors;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectKind, RepositoryError, RepositoryResult};
use std::collections::HashMap;

/// All commits of the log keyed by id
#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    commits: HashMap<ObjectId, Commit>,
}

impl CommitGraph {
    pub fn new() -> Self {
        CommitGraph::default()
    }

    /// Add a commit, replacing an earlier record with the same id
    pub fn insert(&mut self, commit: Commit) -> Option<Commit> {
        self.commits.insert(commit.id().clone(), commit)
    }

    pub fn get(&self, id: &ObjectId) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn load(&self, id: &ObjectId) -> RepositoryResult<&Commit> {
        self.get(id)
            .ok_or_else(|| RepositoryError::not_found(ObjectKind::Commit, id))
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.commits.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Resolve a full id or a unique abbreviation of one
    pub fn resolve_prefix(&self, prefix: &str) -> RepositoryResult<ObjectId> {
        ObjectId::validate_prefix(prefix)?;

        let mut candidates = self
            .commits
            .keys()
            .filter(|id| id.starts_with(prefix))
            .cloned()
            .collect::<Vec<_>>();
        candidates.sort();

        match candidates.len() {
            0 => Err(RepositoryError::not_found(ObjectKind::Commit, prefix)),
            1 => Ok(candidates.remove(0)),
            _ => Err(RepositoryError::AmbiguousId {
                prefix: prefix.to_string(),
                candidates: candidates.iter().map(|id| id.to_string()).collect(),
            }),
        }
    }

    /// Walk first parents from `start` back to the root
    pub fn ancestors(&self, start: &ObjectId) -> Ancestors<'_> {
        Ancestors::new(self, Some(start.clone()))
    }
}

impl FromIterator<Commit> for CommitGraph {
    fn from_iter<I: IntoIterator<Item = Commit>>(iter: I) -> Self {
        let mut graph = CommitGraph::new();
        for commit in iter {
            graph.insert(commit);
        }
        graph
    }
}
