//! Core repository components
//!
//! This module contains the persisted collections and the working tree:
//!
//! - `database`: content-addressed blob storage
//! - `index`: staging area for the next commit
//! - `commit_log`: append-only log of commit records
//! - `refs`: branch table and the current-branch pointer
//! - `workspace`: working directory file system operations
//! - `repository`: the context value that owns all of the above

pub(crate) mod atomic;
pub mod commit_log;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
