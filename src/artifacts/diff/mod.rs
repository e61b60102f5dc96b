//! Commit comparison
//!
//! - `manifest_diff`: which files were added, removed, changed or left alone
//! - `diff_algorithm`: line-by-line comparison of two versions of a changed file
//!
//! Line diffs use Myers' algorithm by default. The greedy lockstep scan is kept
//! for callers that need output identical to older repositories.

pub mod diff_algorithm;
pub mod manifest_diff;
