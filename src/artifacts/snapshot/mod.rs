//! Commit snapshots
//!
//! Reconciles the staging index against the working directory and turns the
//! result into one canonical tree per directory level:
//!
//! - `tree_builder`: Resolves the committable path set and builds the root tree

pub mod tree_builder;
