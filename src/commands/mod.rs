//! Command implementations
//!
//! - `porcelain`: user-facing version control workflows (init, add, commit, log, etc.)

pub mod porcelain;
