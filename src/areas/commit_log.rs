//! Commit log
//!
//! Append-only text file holding every commit record in creation order. Records are
//! never rewritten: a new commit is appended as a whole block, synced to disk, and
//! only then may a branch be pointed at it.
//!
//! Loading builds a [`CommitGraph`] keyed by commit id. A trailing record without its
//! `END` line is what an interrupted append leaves behind, so it is skipped with a
//! warning instead of failing the whole load.

use crate::areas::atomic::{lock_path_for, with_exclusive_lock};
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::{COMMIT_PREFIX, Commit, RECORD_TERMINATOR, RecordLine};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, warn};

const SOURCE_NAME: &str = "commit log";

#[derive(Debug)]
pub struct CommitLog {
    /// Path to the log file (typically `.minigit/commits.txt`)
    path: Box<Path>,
}

impl CommitLog {
    pub fn new(path: Box<Path>) -> Self {
        CommitLog { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a commit record and sync it to disk
    pub fn append(&self, commit: &Commit) -> RepositoryResult<()> {
        with_exclusive_lock(&lock_path_for(&self.path), || {
            let mut log_file = std::fs::OpenOptions::new()
                .read(true)
                .append(true)
                .create(true)
                .open(&self.path)?;

            let mut record = String::new();
            if !Self::ends_with_newline(&mut log_file)? {
                record.push('\n');
            }
            record.push_str(&commit.to_record());

            log_file.write_all(record.as_bytes())?;
            log_file.sync_all()?;

            Ok(())
        })?;

        debug!(
            commit = %commit.id(),
            parents = commit.parents().len(),
            files = commit.manifest().len(),
            "appended commit"
        );

        Ok(())
    }

    fn ends_with_newline(log_file: &mut std::fs::File) -> RepositoryResult<bool> {
        let len = log_file.metadata()?.len();
        if len == 0 {
            return Ok(true);
        }

        let mut last = [0u8; 1];
        log_file.seek(SeekFrom::Start(len - 1))?;
        log_file.read_exact(&mut last)?;

        Ok(last[0] == b'\n')
    }

    /// Parse every record of the log, a later record wins over an earlier one with the same id
    pub fn load_all(&self) -> RepositoryResult<CommitGraph> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        Self::parse_log(&content)
    }

    fn parse_log(content: &str) -> RepositoryResult<CommitGraph> {
        let mut graph = CommitGraph::new();
        let mut open_record: Option<Vec<RecordLine<'_>>> = None;

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;

            if line.starts_with(COMMIT_PREFIX) {
                if let Some(partial) = open_record.take() {
                    warn!(
                        line = partial.first().map(|(no, _)| *no).unwrap_or(line_no),
                        "discarding commit record without terminator"
                    );
                }
                open_record = Some(vec![(line_no, line)]);
            } else if line.trim_end() == RECORD_TERMINATOR {
                let record = open_record.take().ok_or_else(|| {
                    RepositoryError::malformed(SOURCE_NAME, line_no, "terminator outside a record")
                })?;
                graph.insert(Commit::parse_record(&record, SOURCE_NAME)?);
            } else if let Some(record) = open_record.as_mut() {
                record.push((line_no, line));
            } else if !line.trim().is_empty() {
                return Err(RepositoryError::malformed(
                    SOURCE_NAME,
                    line_no,
                    "expected COMMIT line",
                ));
            }
        }

        if let Some(partial) = open_record {
            warn!(
                line = partial.first().map(|(no, _)| *no).unwrap_or_default(),
                "ignoring truncated trailing commit record"
            );
        }

        Ok(graph)
    }

    pub fn load(&self, id: &ObjectId) -> RepositoryResult<Commit> {
        self.load_all()?.load(id).cloned()
    }

    /// Resolve a full commit id or a unique abbreviation of one
    pub fn resolve_prefix(&self, prefix: &str) -> RepositoryResult<ObjectId> {
        self.load_all()?.resolve_prefix(prefix)
    }
}
