//! Commit record
//!
//! Commits pair a manifest with metadata and links to their parents. They are
//! immutable once created and identified by the SHA-1 of their record body.
//!
//! ## Format
//!
//! In the commit log:
//! ```text
//! COMMIT <id>
//! TIME <rfc3339 timestamp>
//! MESSAGE <message, with `\` and newlines escaped>
//! PARENT <first-parent-id or empty>
//! PARENT <merged-in-parent-id>          (merge commits only)
//! FILE <path>:<blob-id>                 (zero or more, ordered by path)
//! END
//! ```
//!
//! The body is every line between `COMMIT` and `END`, each terminated by `\n`.

use crate::artifacts::objects::manifest::Manifest;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};

pub const COMMIT_PREFIX: &str = "COMMIT ";
pub const TIME_PREFIX: &str = "TIME ";
pub const MESSAGE_PREFIX: &str = "MESSAGE ";
pub const PARENT_PREFIX: &str = "PARENT";
pub const FILE_PREFIX: &str = "FILE ";
pub const RECORD_TERMINATOR: &str = "END";

/// A record line together with its 1-based line number in the log
pub type RecordLine<'l> = (usize, &'l str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: ObjectId,
    timestamp: DateTime<FixedOffset>,
    message: String,
    /// First parent is the branch the commit was made on, a second one is recorded by merges
    parents: Vec<ObjectId>,
    manifest: Manifest,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        manifest: Manifest,
        message: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let body = Self::render_body(&timestamp, &message, &parents, &manifest);

        Commit {
            id: ObjectId::from_content(body.as_bytes()),
            timestamp,
            message,
            parents,
            manifest,
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The parent on the commit's own branch
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// The full log record, from the `COMMIT` line to the terminator
    pub fn to_record(&self) -> String {
        format!(
            "{COMMIT_PREFIX}{}\n{}{RECORD_TERMINATOR}\n",
            self.id,
            Self::render_body(&self.timestamp, &self.message, &self.parents, &self.manifest)
        )
    }

    fn render_body(
        timestamp: &DateTime<FixedOffset>,
        message: &str,
        parents: &[ObjectId],
        manifest: &Manifest,
    ) -> String {
        let mut lines = vec![
            format!("{TIME_PREFIX}{}", timestamp.to_rfc3339()),
            format!("{MESSAGE_PREFIX}{}", escape_message(message)),
        ];

        if parents.is_empty() {
            lines.push(format!("{PARENT_PREFIX} "));
        }
        for parent in parents {
            lines.push(format!("{PARENT_PREFIX} {parent}"));
        }
        for (path, oid) in manifest {
            lines.push(format!("{FILE_PREFIX}{path}:{oid}"));
        }

        lines.into_iter().map(|line| line + "\n").collect()
    }

    /// Parse a record from its `COMMIT` line up to, but excluding, the terminator.
    ///
    /// The id on the `COMMIT` line must match the hash of the body.
    pub fn parse_record(lines: &[RecordLine<'_>], source_name: &str) -> RepositoryResult<Self> {
        let malformed =
            |line: usize, reason: &str| RepositoryError::malformed(source_name, line, reason);

        let (header_no, header) = lines
            .first()
            .copied()
            .ok_or_else(|| malformed(0, "empty commit record"))?;
        let id = header
            .strip_prefix(COMMIT_PREFIX)
            .ok_or_else(|| malformed(header_no, "expected COMMIT line"))?;
        let id = ObjectId::try_parse(id.trim())
            .map_err(|e| malformed(header_no, &e.to_string()))?;

        let mut body = lines[1..].iter().copied().peekable();

        let (time_no, time_line) = body
            .next()
            .ok_or_else(|| malformed(header_no, "missing TIME line"))?;
        let timestamp = time_line
            .strip_prefix(TIME_PREFIX)
            .ok_or_else(|| malformed(time_no, "expected TIME line"))?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp.trim())
            .map_err(|e| malformed(time_no, &format!("invalid timestamp: {e}")))?;

        let (message_no, message_line) = body
            .next()
            .ok_or_else(|| malformed(time_no, "missing MESSAGE line"))?;
        let message = message_line
            .strip_prefix(MESSAGE_PREFIX)
            .or_else(|| message_line.strip_prefix(MESSAGE_PREFIX.trim_end()))
            .ok_or_else(|| malformed(message_no, "expected MESSAGE line"))?;
        let message = unescape_message(message);

        let mut parents = Vec::new();
        let mut parent_seen = false;
        while let Some((_, line)) = body.peek().copied() {
            let Some(parent) = line.strip_prefix(PARENT_PREFIX) else {
                break;
            };
            let (parent_no, _) = body.next().unwrap_or((message_no, line));
            parent_seen = true;

            let parent = parent.trim();
            if !parent.is_empty() {
                parents.push(
                    ObjectId::try_parse(parent).map_err(|e| malformed(parent_no, &e.to_string()))?,
                );
            }
        }
        if !parent_seen {
            return Err(malformed(message_no + 1, "missing PARENT line"));
        }

        let mut manifest = Manifest::new();
        for (file_no, line) in body {
            let entry = line
                .strip_prefix(FILE_PREFIX)
                .ok_or_else(|| malformed(file_no, "expected FILE line"))?;
            let (path, oid) = entry
                .rsplit_once(':')
                .ok_or_else(|| malformed(file_no, "FILE line without ':' separator"))?;
            if path.is_empty() {
                return Err(malformed(file_no, "FILE line with empty path"));
            }
            let oid = ObjectId::try_parse(oid.trim())
                .map_err(|e| malformed(file_no, &e.to_string()))?;

            manifest.insert(path, oid);
        }

        let body_text: String = lines[1..]
            .iter()
            .map(|(_, line)| format!("{line}\n"))
            .collect();
        if ObjectId::from_content(body_text.as_bytes()) != id {
            return Err(malformed(header_no, "commit id does not match its content"));
        }

        Ok(Commit {
            id,
            timestamp,
            message,
            parents,
            manifest,
        })
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        Bytes::from(Self::render_body(
            &self.timestamp,
            &self.message,
            &self.parents,
            &self.manifest,
        ))
    }
}

impl Object for Commit {}

fn escape_message(message: &str) -> String {
    message.replace('\\', "\\\\").replace('\n', "\\n")
}

fn unescape_message(raw: &str) -> String {
    let mut message = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            message.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => message.push('\n'),
            Some('\\') => message.push('\\'),
            Some(other) => {
                message.push('\\');
                message.push(other);
            }
            None => message.push('\\'),
        }
    }

    message
}
