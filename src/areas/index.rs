//! Staging index
//!
//! The index tracks which blob each path should have in the next commit.
//! The in-memory map is authoritative for the lifetime of one command; the file
//! is only read on load and rewritten on save.
//!
//! ## Index File Format
//!
//! A zlib-compressed UTF-8 text with one `<hash> <path>` record per line.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Staging index for a single invocation
///
/// Concurrent invocations are not coordinated: the load-modify-save cycle is
/// last-writer-wins. The file locks taken while reading and writing only keep
/// a reader from observing a half-written file.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.questgit/index`)
    path: Box<Path>,
    /// Staged entries keyed by path
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Load the index stored at `path`
    ///
    /// A missing or empty file yields an empty index. A file that fails to
    /// decompress is reported as lost data and also yields an empty index.
    pub fn load(path: Box<Path>) -> anyhow::Result<Self> {
        let mut index = Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        };
        index.rehydrate()?;

        Ok(index)
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the index file, discarding in-memory changes
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut compressed = Vec::new();
        lock.deref_mut().read_to_end(&mut compressed)?;

        // if the index file is empty, return early
        if compressed.is_empty() {
            return Ok(());
        }

        let content = match Self::decompress(&compressed) {
            Ok(content) => content,
            Err(error) => {
                tracing::error!(
                    path = %self.path.display(),
                    "index file is corrupt, staged entries were lost: {error:#}"
                );
                return Ok(());
            }
        };

        for record in content.lines().filter(|line| !line.trim().is_empty()) {
            match IndexEntry::parse_record(record) {
                Ok(entry) => {
                    self.entries.insert(entry.path.clone(), entry);
                }
                Err(error) => tracing::warn!("skipping index record: {error:#}"),
            }
        }

        Ok(())
    }

    /// Compress the current entries and overwrite the index file
    pub fn save(&mut self) -> anyhow::Result<()> {
        let records = self
            .entries
            .values()
            .map(|entry| entry.to_record().map(|record| record + "\n"))
            .collect::<anyhow::Result<String>>()?;
        let compressed = Self::compress(records.as_bytes())?;

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(&compressed)
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;

        self.changed = false;
        tracing::debug!(entries = self.entries.len(), "index saved");

        Ok(())
    }

    /// Stage `oid` for `path`, replacing any previous entry
    pub fn add_entry(&mut self, path: impl Into<PathBuf>, oid: ObjectId) {
        let path = path.into();
        self.entries
            .insert(path.clone(), IndexEntry::new(path, oid));
        self.changed = true;
    }

    /// Unstage `path`; absent paths are ignored
    pub fn remove_entry(&mut self, path: &Path) {
        if self.entries.remove(path).is_some() {
            self.changed = true;
        }
    }

    pub fn get_entry(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path).map(|entry| &entry.oid)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    fn compress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress index content")?;

        encoder
            .finish()
            .context("Unable to finish compressing index content")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<String> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .context("Unable to decompress index content")?;

        Ok(content)
    }
}
