//! Porcelain commands (user-facing workflows)
//!
//! - `init`: Create the repository directory layout
//! - `config`: Read or set the author identity
//! - `add`: Stage files for the next commit
//! - `commit`: Record staged files as a new commit
//! - `log`: Show commit history

pub mod add;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
