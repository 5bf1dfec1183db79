//! Index file format
//!
//! The index (also called staging area) records which blob each path should have
//! in the next commit.
//!
//! ## File Format
//!
//! ```text
//! zlib(
//!   <40-hex-blob-hash> <relative/path>\n
//!   ...
//! )
//! ```
//!
//! Record order on disk carries no meaning; records are loaded into a path-keyed map.

pub mod index_entry;

/// Separator between the blob hash and the path of a record
pub const RECORD_SEPARATOR: char = ' ';
