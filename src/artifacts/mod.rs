//! Data structures and algorithms
//!
//! - `branch`: Validated branch names
//! - `diff`: Manifest classification and line diffing (Myers' diff, lockstep scan)
//! - `log`: Commit graph and ancestor traversal
//! - `merge`: Two-way merge of branch tips
//! - `objects`: Object ids, blobs, manifests and commit records

pub mod branch;
pub mod diff;
pub mod log;
pub mod merge;
pub mod objects;
