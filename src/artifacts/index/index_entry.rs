//! Index entry representation
//!
//! Each entry maps a path, relative to the repository root and always written
//! with `/` separators, to the blob hash it was staged with.

use crate::artifacts::index::RECORD_SEPARATOR;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

/// Whether `path` fits on a single index record and tree line
pub fn is_recordable(path: &Path) -> bool {
    !path.to_string_lossy().contains(['\n', '\r'])
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub path: PathBuf,
    /// Hash of the staged blob
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Path components from the top-level directory down to the file name
    pub fn components(&self) -> anyhow::Result<Vec<&str>> {
        self.path
            .components()
            .map(|component| match component {
                Component::Normal(name) => name
                    .to_str()
                    .with_context(|| format!("Non UTF-8 path: {}", self.path.display())),
                _ => Err(anyhow::anyhow!(
                    "Index paths must be relative and normalized: {}",
                    self.path.display()
                )),
            })
            .collect()
    }

    /// Render as a `<hash> <path>` record
    pub fn to_record(&self) -> anyhow::Result<String> {
        anyhow::ensure!(
            is_recordable(&self.path),
            "Line break in index path: {:?}",
            self.path
        );

        Ok(format!(
            "{}{}{}",
            self.oid,
            RECORD_SEPARATOR,
            self.components()?.join("/")
        ))
    }

    /// Parse a `<hash> <path>` record; paths may contain spaces
    pub fn parse_record(record: &str) -> anyhow::Result<Self> {
        let (oid, path) = record
            .split_once(RECORD_SEPARATOR)
            .with_context(|| format!("Invalid index record: {record}"))?;
        if path.is_empty() {
            anyhow::bail!("Invalid index record: empty path");
        }

        let entry = IndexEntry::new(PathBuf::from(path), ObjectId::try_parse(oid)?);
        entry.components()?;

        Ok(entry)
    }
}
