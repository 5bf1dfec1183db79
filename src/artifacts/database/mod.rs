//! Database entry types
//!
//! This module contains types used when reading and writing tree objects.
//! Database entries reference objects together with their mode.

pub mod database_entry;
pub mod entry_mode;
