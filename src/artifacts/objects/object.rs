use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use sha1::{Digest, Sha1};

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Object: Packable {
    fn object_id(&self) -> ObjectId {
        ObjectId::from_content(&self.serialize())
    }
}

pub(crate) fn sha1_hex(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);

    format!("{:x}", hasher.finalize())
}
