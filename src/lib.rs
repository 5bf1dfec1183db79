//! questgit: a minimal content-addressed version control core
//!
//! - `areas`: On-disk state (object database, index, refs, workspace, config)
//! - `artifacts`: Objects, snapshots and history traversal
//! - `commands`: Operations exposed by the `questgit` binary

pub mod areas;
pub mod artifacts;
pub mod commands;
