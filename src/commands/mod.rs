//! Command implementations
//!
//! Each command is an `impl Repository` block, grouped the way git groups them:
//!
//! - `plumbing`: Direct object access (cat-file, hash-object)
//! - `porcelain`: Version control workflows (init, config, add, commit, log)

pub mod plumbing;
pub mod porcelain;
