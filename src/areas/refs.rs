//! Branch table and current-branch pointer
//!
//! Branches are named, mutable pointers into the commit log. A branch created before
//! the first commit points nowhere, which is stored as an empty commit id.
//!
//! ## File Format
//!
//! - `branches.txt`: one `<name>:<commit-id-or-empty>` line per branch, ordered by name
//! - `HEAD.txt`: the name of the current branch on a single line
//!
//! Both files are rewritten wholly on every change, through a temp file renamed into
//! place while holding the file's lock. Read-modify-write cycles on the branch table
//! hold the lock across the read as well. Advancing a branch also checks, under that
//! lock, that the tip is still the one the caller started from.

use crate::areas::atomic::{lock_path_for, with_exclusive_lock, write_atomically};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectKind, RepositoryError, RepositoryResult};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const BRANCHES_FILE: &str = "branches.txt";
pub const HEAD_FILE: &str = "HEAD.txt";

/// Branch name to tip commit, `None` until the branch's first commit
pub type BranchTable = BTreeMap<BranchName, Option<ObjectId>>;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.minigit`)
    path: Box<Path>,
}

impl Refs {
    pub fn branches_path(&self) -> PathBuf {
        self.path.join(BRANCHES_FILE)
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    /// Write a table holding only `default_branch` and select it as current
    pub fn write_initial(&self, default_branch: &BranchName) -> RepositoryResult<()> {
        let mut table = BranchTable::new();
        table.insert(default_branch.clone(), None);

        let branches_path = self.branches_path();
        with_exclusive_lock(&lock_path_for(&branches_path), || {
            Self::write_table(&branches_path, &table)
        })?;

        self.write_head(default_branch)
    }

    pub fn read_table(&self) -> RepositoryResult<BranchTable> {
        Self::read_table_at(&self.branches_path())
    }

    fn read_table_at(branches_path: &Path) -> RepositoryResult<BranchTable> {
        let content = match std::fs::read_to_string(branches_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BranchTable::new()),
            Err(e) => return Err(e.into()),
        };

        let mut table = BranchTable::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let malformed =
                |reason: String| RepositoryError::malformed(BRANCHES_FILE, index + 1, reason);

            let (name, commit_id) = line
                .split_once(':')
                .ok_or_else(|| malformed("expected <name>:<commit-id>".to_string()))?;
            let name = BranchName::try_parse(name).map_err(|e| malformed(e.to_string()))?;
            let commit_id = match commit_id.trim() {
                "" => None,
                id => Some(ObjectId::try_parse(id).map_err(|e| malformed(e.to_string()))?),
            };

            table.insert(name, commit_id);
        }

        Ok(table)
    }

    fn write_table(branches_path: &Path, table: &BranchTable) -> RepositoryResult<()> {
        let content = table
            .iter()
            .map(|(name, commit_id)| {
                let commit_id = commit_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                format!("{name}:{commit_id}\n")
            })
            .collect::<String>();

        write_atomically(branches_path, content.as_bytes())
    }

    /// Run `update` on the branch table and persist the result, all under the table's lock
    fn update_table<T>(
        &self,
        update: impl FnOnce(&mut BranchTable) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let branches_path = self.branches_path();

        with_exclusive_lock(&lock_path_for(&branches_path), || {
            let mut table = Self::read_table_at(&branches_path)?;
            let result = update(&mut table)?;
            Self::write_table(&branches_path, &table)?;
            Ok(result)
        })
    }

    /// Add `name` pointing at `source`, failing if the name is taken
    pub fn create_branch(
        &self,
        name: &BranchName,
        source: Option<ObjectId>,
    ) -> RepositoryResult<()> {
        self.update_table(|table| {
            if table.contains_key(name) {
                return Err(RepositoryError::already_exists(ObjectKind::Branch, name));
            }

            debug!(branch = %name, source = ?source, "created branch");
            table.insert(name.clone(), source);
            Ok(())
        })
    }

    /// The tip of `name`, `None` if the branch has no commits yet
    pub fn resolve(&self, name: &BranchName) -> RepositoryResult<Option<ObjectId>> {
        self.read_table()?
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(ObjectKind::Branch, name))
    }

    pub fn contains(&self, name: &BranchName) -> RepositoryResult<bool> {
        Ok(self.read_table()?.contains_key(name))
    }

    /// Move `name` from `expected` to `commit_id`.
    ///
    /// Fails with `BranchMoved` when the recorded tip is no longer `expected`. A branch
    /// missing from the table counts as having no commits and is added back.
    pub fn advance(
        &self,
        name: &BranchName,
        expected: Option<&ObjectId>,
        commit_id: &ObjectId,
    ) -> RepositoryResult<()> {
        self.update_table(|table| {
            let found = table.get(name).cloned().flatten();
            if found.as_ref() != expected {
                return Err(RepositoryError::branch_moved(name, expected, found.as_ref()));
            }

            table.insert(name.clone(), Some(commit_id.clone()));
            debug!(
                branch = %name,
                from = ?found,
                to = %commit_id,
                "advanced branch"
            );
            Ok(())
        })
    }

    pub fn current(&self) -> RepositoryResult<BranchName> {
        let content = match std::fs::read_to_string(self.head_path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::not_found(ObjectKind::Path, HEAD_FILE));
            }
            Err(e) => return Err(e.into()),
        };

        let name = content.lines().next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(RepositoryError::malformed(HEAD_FILE, 1, "no current branch"));
        }

        BranchName::try_parse(name)
            .map_err(|e| RepositoryError::malformed(HEAD_FILE, 1, e.to_string()))
    }

    /// The current branch and its tip
    pub fn current_tip(&self) -> RepositoryResult<(BranchName, Option<ObjectId>)> {
        let current = self.current()?;
        let tip = self.read_table()?.get(&current).cloned().flatten();

        Ok((current, tip))
    }

    pub fn is_current_branch(&self, name: &BranchName) -> RepositoryResult<bool> {
        Ok(&self.current()? == name)
    }

    /// Select `name` as the current branch, which must exist in the table
    pub fn set_current(&self, name: &BranchName) -> RepositoryResult<()> {
        if !self.contains(name)? {
            return Err(RepositoryError::not_found(ObjectKind::Branch, name));
        }

        self.write_head(name)?;
        debug!(branch = %name, "switched current branch");

        Ok(())
    }

    fn write_head(&self, name: &BranchName) -> RepositoryResult<()> {
        let head_path = self.head_path();

        with_exclusive_lock(&lock_path_for(&head_path), || {
            write_atomically(&head_path, format!("{name}\n").as_bytes())
        })
    }

    pub fn list_branches(&self) -> RepositoryResult<Vec<(BranchName, Option<ObjectId>)>> {
        Ok(self.read_table()?.into_iter().collect())
    }
}
