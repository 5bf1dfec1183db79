//! Plumbing commands (low-level object access)
//!
//! - `cat-file`: Print the body of a stored object
//! - `hash-object`: Compute a blob ID and optionally store the blob

pub mod cat_file;
pub mod hash_object;
