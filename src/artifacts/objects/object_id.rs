//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Blobs and commits
//! share the same identifier shape.
//!
//! ## Storage
//!
//! Blobs are stored in `.minigit/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::object::sha1_hex;
use crate::artifacts::objects::{MIN_OBJECT_ID_PREFIX, OBJECT_ID_LENGTH};
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate a full 40-character object id
    pub fn try_parse(id: impl Into<String>) -> RepositoryResult<Self> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH {
            return Err(RepositoryError::InvalidName(format!(
                "object id '{}' has length {}, expected {}",
                id,
                id.len(),
                OBJECT_ID_LENGTH
            )));
        }
        if !Self::is_hex(&id) {
            return Err(RepositoryError::InvalidName(format!(
                "object id '{id}' is not lowercase hexadecimal"
            )));
        }

        Ok(Self(id))
    }

    /// Validate an abbreviated id as typed by a user
    pub fn validate_prefix(prefix: &str) -> RepositoryResult<()> {
        if prefix.len() < MIN_OBJECT_ID_PREFIX
            || prefix.len() > OBJECT_ID_LENGTH
            || !Self::is_hex(prefix)
        {
            return Err(RepositoryError::InvalidName(format!(
                "'{prefix}' is not a commit id or an abbreviation of at least {MIN_OBJECT_ID_PREFIX} hex characters"
            )));
        }

        Ok(())
    }

    fn is_hex(value: &str) -> bool {
        value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    /// Hash raw content into its address
    pub fn from_content(content: &[u8]) -> Self {
        Self(sha1_hex(content))
    }

    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
