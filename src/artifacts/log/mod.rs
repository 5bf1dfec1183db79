//! Commit history traversal for `questgit log`
//!
//! - `rev_list`: Walks first-parent history from a starting commit
//!
//! ## Broken history
//!
//! A commit that is missing or unreadable ends the walk. Everything gathered
//! before it is still returned.

pub mod rev_list;
