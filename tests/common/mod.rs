#![allow(dead_code)]

pub mod command;
pub mod file;

/// Name of the repository directory created by `questgit init`
pub const REPOSITORY_DIR: &str = ".questgit";
