//! Commit history
//!
//! - `commit_graph`: every commit of the log indexed by id, loaded once per operation
//! - `rev_list`: lazy walk from a commit back to the root along first parents

pub mod commit_graph;
pub mod rev_list;
