//! Object store
//!
//! Blobs live under `objects/<first-2-chars>/<remaining-38-chars>` and hold the raw
//! file content. An address is written at most once: storing content that is already
//! present is a no-op, and nothing is ever deleted.

use crate::areas::atomic::write_atomically;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ObjectKind, RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store a blob and return its address.
    ///
    /// Idempotent: identical content maps to the same address and is written once.
    pub fn store(&self, blob: &Blob) -> RepositoryResult<ObjectId> {
        let oid = blob.object_id();
        let object_path = self.path.join(oid.to_path());

        if object_path.exists() {
            debug!(oid = %oid, "blob already stored");
            return Ok(oid);
        }

        if let Some(object_dir) = object_path.parent() {
            std::fs::create_dir_all(object_dir)?;
        }
        write_atomically(&object_path, blob.content())?;
        debug!(oid = %oid, size = blob.content().len(), "stored new blob");

        Ok(oid)
    }

    pub fn load(&self, oid: &ObjectId) -> RepositoryResult<Bytes> {
        let object_path = self.path.join(oid.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::not_found(ObjectKind::Blob, oid))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_blob(&self, oid: &ObjectId) -> RepositoryResult<Blob> {
        Ok(Blob::new(self.load(oid)?))
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.to_path()).is_file()
    }
}
