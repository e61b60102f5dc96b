//! Two-way branch merge
//!
//! The merge starts from the current branch's manifest and brings in every file
//! the target branch adds. Files both sides hold with different content keep the
//! current branch's version and are reported as conflicts; the merge commit is
//! written regardless.

pub mod two_way;
