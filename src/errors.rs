//! Repository error types
//!
//! Every storage and algorithm layer reports failures through [`RepositoryError`].
//! The porcelain commands wrap these in `anyhow` with extra context, so callers can
//! still `downcast_ref::<RepositoryError>()` to branch on the failure kind.
//!
//! Merge conflicts are intentionally absent: a merge with diverging files still
//! succeeds and reports the conflicting paths in its outcome.

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// The kind of thing an error is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Repository,
    Branch,
    Commit,
    Blob,
    Path,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Repository => "repository",
            ObjectKind::Branch => "branch",
            ObjectKind::Commit => "commit",
            ObjectKind::Blob => "blob",
            ObjectKind::Path => "path",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// a branch, commit, blob, path or the repository itself is absent
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ObjectKind, name: String },

    /// duplicate branch name or re-initialization
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: ObjectKind, name: String },

    /// nothing staged, empty file content, empty commit message
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// a persisted record could not be parsed into its expected shape
    #[error("malformed {source_name} at line {line}: {reason}")]
    Malformed {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// a branch name or path that cannot be represented in the persisted layout
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// an abbreviated commit id matches more than one commit
    #[error("ambiguous commit id '{prefix}', candidates: {}", candidates.join(", "))]
    AmbiguousId {
        prefix: String,
        candidates: Vec<String>,
    },

    /// the branch tip changed between reading it and advancing it
    #[error("branch '{branch}' moved to {found} while expecting {expected}")]
    BranchMoved {
        branch: String,
        expected: String,
        found: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub fn not_found(kind: ObjectKind, name: impl std::fmt::Display) -> Self {
        RepositoryError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub fn already_exists(kind: ObjectKind, name: impl std::fmt::Display) -> Self {
        RepositoryError::AlreadyExists {
            kind,
            name: name.to_string(),
        }
    }

    pub fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        RepositoryError::Malformed {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub fn branch_moved(
        branch: impl std::fmt::Display,
        expected: Option<&ObjectId>,
        found: Option<&ObjectId>,
    ) -> Self {
        let describe = |tip: Option<&ObjectId>| {
            tip.map(|id| id.to_string())
                .unwrap_or_else(|| "no commits".to_string())
        };

        RepositoryError::BranchMoved {
            branch: branch.to_string(),
            expected: describe(expected),
            found: describe(found),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, RepositoryError::AlreadyExists { .. })
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, RepositoryError::EmptyInput(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RepositoryError::Malformed { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
