//! Snapshot of a file tree: file path to blob id, ordered by path

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::collections::btree_map;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, ObjectId>,
}

impl Manifest {
    pub fn new() -> Self {
        Manifest::default()
    }

    /// Insert or overwrite the blob for `path`, returning the previous one
    pub fn insert(&mut self, path: impl Into<String>, oid: ObjectId) -> Option<ObjectId> {
        self.entries.insert(path.into(), oid)
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ObjectId> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'m> IntoIterator for &'m Manifest {
    type Item = (&'m String, &'m ObjectId);
    type IntoIter = btree_map::Iter<'m, String, ObjectId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, ObjectId)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, ObjectId)>>(iter: I) -> Self {
        Manifest {
            entries: iter.into_iter().collect(),
        }
    }
}
