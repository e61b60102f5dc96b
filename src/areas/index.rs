//! Staging area
//!
//! Holds the `path -> blob id` pairs that will make up the next commit. Staging a
//! path that is already staged replaces its entry, so every path appears once.
//!
//! ## File Format
//!
//! `staging.txt` holds one `<path>:<blob-id>` line per entry, ordered by path.
//! Paths may contain `:`, the id is always the part after the last one.

use crate::areas::atomic::{lock_path_for, with_exclusive_lock, write_atomically};
use crate::artifacts::objects::manifest::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const SOURCE_NAME: &str = "staging area";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the staging file (typically `.minigit/staging.txt`)
    path: Box<Path>,
    entries: BTreeMap<String, ObjectId>,
    /// Set when entries differ from what was last loaded or written
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload the entries from disk, a missing file is an empty staging area
    pub fn rehydrate(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (path, oid) = line.rsplit_once(':').ok_or_else(|| {
                RepositoryError::malformed(SOURCE_NAME, line_no + 1, "expected <path>:<blob-id>")
            })?;
            if path.is_empty() {
                return Err(RepositoryError::malformed(
                    SOURCE_NAME,
                    line_no + 1,
                    "empty path",
                ));
            }
            let oid = ObjectId::try_parse(oid.trim())
                .map_err(|e| RepositoryError::malformed(SOURCE_NAME, line_no + 1, e.to_string()))?;

            self.entries.insert(path.to_string(), oid);
        }

        Ok(())
    }

    /// Stage `oid` under `path`, returning the blob id it replaces
    pub fn add(&mut self, path: impl Into<String>, oid: ObjectId) -> Option<ObjectId> {
        let path = path.into();
        let previous = self.entries.insert(path.clone(), oid.clone());

        if previous.as_ref() != Some(&oid) {
            debug!(path = %path, oid = %oid, replaced = previous.is_some(), "staged file");
            self.changed = true;
        }

        previous
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the manifest of the next commit from the staged entries
    pub fn materialize(&self) -> RepositoryResult<Manifest> {
        if self.entries.is_empty() {
            return Err(RepositoryError::EmptyInput(
                "nothing staged to commit".to_string(),
            ));
        }

        Ok(self
            .entries
            .iter()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect())
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
    }

    /// Persist the entries if they changed since the last load or write
    pub fn write_updates(&mut self) -> RepositoryResult<()> {
        if !self.changed {
            return Ok(());
        }

        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path}:{oid}\n"))
            .collect::<String>();

        with_exclusive_lock(&lock_path_for(&self.path), || {
            write_atomically(&self.path, content.as_bytes())
        })?;
        self.changed = false;

        Ok(())
    }
}
