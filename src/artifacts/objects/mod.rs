//! Immutable repository objects
//!
//! Two kinds of objects are content-addressed:
//!
//! - **Blob**: raw file content, stored in the object database
//! - **Commit**: a manifest plus metadata, stored as a record in the commit log
//!
//! A **Manifest** maps file paths to blob ids and is embedded in every commit.
//! Both object kinds are identified by the SHA-1 of their serialized form.

pub mod blob;
pub mod commit;
pub mod manifest;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest accepted abbreviation of an object id
pub const MIN_OBJECT_ID_PREFIX: usize = 4;
