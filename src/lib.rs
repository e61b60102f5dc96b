//! A minimal version-control core
//!
//! Snapshots of a working tree are tracked through content-addressed blobs, an
//! append-only commit log and named branches pointing into it.
//!
//! - `areas`: the persisted collections and the [`Repository`](areas::repository::Repository) owning them
//! - `artifacts`: data types and algorithms (commits, manifests, merge, diff)
//! - `commands`: the user-facing operations
//! - `config`, `errors`, `observability`: configuration, error types and logging setup

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod observability;
