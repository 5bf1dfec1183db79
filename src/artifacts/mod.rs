//! Version control data structures and algorithms
//!
//! - `core`: Error type and the three-way object lookup result
//! - `database`: Tree entry descriptors (mode + object ID)
//! - `index`: Staging index records
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, tree, commit) and their framing
//! - `snapshot`: Reconciling the index with the working tree into a commit tree

pub mod core;
pub mod database;
pub mod index;
pub mod log;
pub mod objects;
pub mod snapshot;
