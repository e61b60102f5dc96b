//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block that validates its inputs, drives
//! the persisted collections in `areas` and prints a short report through the
//! repository's writer.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit from the staged files
//! - `log`: Show the history of the current branch
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches and restore their files
//! - `merge`: Merge a branch into the current one
//! - `diff`: Compare two commits

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
