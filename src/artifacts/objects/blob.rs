//! Blob object
//!
//! Blobs store file content. They carry no path or metadata, so identical files
//! anywhere in the tree share one blob. Unlike the git object format, the stored
//! form is the raw content with no header.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Split the content on `\n` only, so a `\r` before it stays part of the line.
    ///
    /// A trailing newline does not start an extra empty line. Invalid UTF-8 sequences
    /// are replaced rather than rejected.
    pub fn lines(&self) -> Vec<String> {
        if self.content.is_empty() {
            return Vec::new();
        }
        let content = self
            .content
            .strip_suffix(b"\n")
            .unwrap_or(&self.content[..]);

        content
            .split(|byte| *byte == b'\n')
            .map(|line| String::from_utf8_lossy(line).to_string())
            .collect()
    }
}

impl From<&str> for Blob {
    fn from(content: &str) -> Self {
        Blob::new(Bytes::copy_from_slice(content.as_bytes()))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Object for Blob {}
