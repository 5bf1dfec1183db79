//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are three types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, kinds, object IDs and names)
//! - **Commit**: Snapshot with metadata (author, message, parent commit, tree)
//!
//! Every kind is framed the same way before hashing and compression:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
