//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `config`: Author identity stored in the repository configuration
//! - `database`: Object database for storing blobs, trees, and commits
//! - `index`: Staging area for tracking the next commit's content
//! - `refs`: Reference management (branches, HEAD)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
