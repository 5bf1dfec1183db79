//! Tree object
//!
//! Trees represent one directory level. They list files (blobs) and
//! subdirectories (other trees) together with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <kind> <hash>\t<name>\n`, sorted by name
//!
//! ## Tree Building
//!
//! Trees are built from a flat list of index entries; intermediate directories
//! are created on demand. Since every directory is created for a file beneath
//! it, a built tree never contains an empty subtree.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::database::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TreeEntry {
    /// Entry pointing at an object already in the database
    Stored(DatabaseEntry),
    /// Nested tree being built
    Directory(Tree),
}

impl TreeEntry {
    fn mode(&self) -> EntryMode {
        match self {
            TreeEntry::Stored(entry) => entry.mode,
            TreeEntry::Directory(_) => EntryMode::Directory,
        }
    }

    fn oid(&self) -> anyhow::Result<ObjectId> {
        match self {
            TreeEntry::Stored(entry) => Ok(entry.oid.clone()),
            TreeEntry::Directory(tree) => tree.object_id(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Build a tree hierarchy from index entries
    ///
    /// The input order does not matter: entries are keyed by name at every level.
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> anyhow::Result<Self> {
        let mut root = Self::default();

        for entry in entries {
            let components = entry.components()?;
            root.add_entry(&components, entry)?;
        }

        Ok(root)
    }

    /// Visit nested trees before their parent
    ///
    /// Children must be stored before the parent that references them.
    pub fn traverse<F, E>(&self, func: &mut F) -> Result<(), E>
    where
        F: FnMut(&Tree) -> Result<(), E>,
    {
        for entry in self.entries.values() {
            if let TreeEntry::Directory(tree) = entry {
                tree.traverse(func)?;
            }
        }

        func(self)
    }

    fn add_entry(&mut self, components: &[&str], entry: &IndexEntry) -> anyhow::Result<()> {
        match components {
            [] => anyhow::bail!("Invalid index entry path: {}", entry.path.display()),
            [name] => {
                self.entries.insert(
                    name.to_string(),
                    TreeEntry::Stored(DatabaseEntry::new(entry.oid.clone(), EntryMode::Regular)),
                );
            }
            [dir, rest @ ..] => {
                let slot = self
                    .entries
                    .entry(dir.to_string())
                    .or_insert_with(|| TreeEntry::Directory(Tree::default()));

                // a file staged under a name that is now a directory loses to the directory
                if let TreeEntry::Stored(_) = slot {
                    *slot = TreeEntry::Directory(Tree::default());
                }

                if let TreeEntry::Directory(tree) = slot {
                    tree.add_entry(rest, entry)?;
                }
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries of this level with their resolved object IDs, sorted by name
    pub fn database_entries(&self) -> anyhow::Result<Vec<(String, DatabaseEntry)>> {
        self.entries
            .iter()
            .map(|(name, entry)| Ok((name.clone(), DatabaseEntry::new(entry.oid()?, entry.mode()))))
            .collect()
    }

    fn entry_line(name: &str, entry: &DatabaseEntry) -> String {
        format!(
            "{} {} {}\t{}\n",
            entry.mode.as_str(),
            entry.mode.object_type().as_str(),
            entry.oid,
            name
        )
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = self
            .database_entries()?
            .iter()
            .map(|(name, entry)| Self::entry_line(name, entry))
            .collect::<String>();

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let (header, name) = line
                .split_once('\t')
                .context("Invalid tree entry: missing name separator")?;
            let mut fields = header.split(' ');
            let (Some(mode), Some(kind), Some(oid), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                anyhow::bail!("Invalid tree entry: {line}");
            };

            let mode = EntryMode::try_from(mode)?;
            if mode.object_type() != ObjectType::try_from(kind)? {
                anyhow::bail!("Invalid tree entry: mode {mode} does not match kind {kind}");
            }
            let oid = ObjectId::try_parse(oid)?;

            entries.insert(name.to_string(), TreeEntry::Stored(DatabaseEntry::new(oid, mode)));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.database_entries()
            .unwrap_or_default()
            .iter()
            .map(|(name, entry)| Self::entry_line(name, entry))
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}
