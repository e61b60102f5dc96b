use crate::artifacts::objects::manifest::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;

/// Classification of one path when going from manifest A to manifest B
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    AddedInB(ObjectId),
    RemovedInB(ObjectId),
    Unchanged(ObjectId),
    Changed { a: ObjectId, b: ObjectId },
}

impl FileChange {
    pub fn from_entries(a: Option<&ObjectId>, b: Option<&ObjectId>) -> Option<Self> {
        match (a, b) {
            (None, Some(b)) => Some(FileChange::AddedInB(b.clone())),
            (Some(a), None) => Some(FileChange::RemovedInB(a.clone())),
            (Some(a), Some(b)) if a == b => Some(FileChange::Unchanged(a.clone())),
            (Some(a), Some(b)) => Some(FileChange::Changed {
                a: a.clone(),
                b: b.clone(),
            }),
            (None, None) => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, FileChange::Unchanged(_))
    }

    /// One-letter status in the style of `--name-status`
    pub fn status_letter(&self) -> char {
        match self {
            FileChange::AddedInB(_) => 'A',
            FileChange::RemovedInB(_) => 'D',
            FileChange::Unchanged(_) => ' ',
            FileChange::Changed { .. } => 'M',
        }
    }
}

/// Classify every path in the union of both manifests, in path order
pub fn diff_manifests(a: &Manifest, b: &Manifest) -> Vec<(String, FileChange)> {
    let paths = a.paths().chain(b.paths()).collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            FileChange::from_entries(a.get(path), b.get(path)).map(|change| (path.clone(), change))
        })
        .collect()
}
