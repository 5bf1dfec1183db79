//! Core utilities and shared types
//!
//! This module contains the error and lookup types shared by every area:
//!
//! - `error`: Typed failures reported to callers of repository operations
//! - `lookup`: Three-way result for reads that may find nothing or garbage

pub mod error;
pub mod lookup;
