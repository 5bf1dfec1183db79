use crate::areas::repository::REPOSITORY_DIR;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Working directory access: enumeration and raw file reads
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    /// Directory names never descended into
    ignored: BTreeSet<String>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace::with_ignored(path, [REPOSITORY_DIR])
    }

    pub fn with_ignored<I, S>(path: Box<Path>, ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Workspace {
            path,
            ignored: ignored.into_iter().map(Into::into).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether any component of a relative path is an ignored directory name
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => self.ignored.contains(name.to_string_lossy().as_ref()),
            _ => false,
        })
    }

    /// List files under `root_file_path` (the whole workspace by default), relative to the root
    ///
    /// A path naming a single file yields just that file. Ignored directories are pruned.
    pub fn list_files(&self, root_file_path: Option<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => std::fs::canonicalize(&p)
                .with_context(|| format!("The specified path does not exist: {:?}", p))?,
            None => self.path.clone().into(),
        };

        let relative_root = root_file_path
            .strip_prefix(self.path.as_ref())
            .with_context(|| format!("{:?} is outside the repository", root_file_path))?;
        if self.is_ignored(relative_root) {
            return Ok(vec![]);
        }

        if root_file_path.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    entry.depth() == 0 || !self.is_ignored(Path::new(entry.file_name()))
                })
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| {
                    entry
                        .path()
                        .strip_prefix(self.path.as_ref())
                        .ok()
                        .map(PathBuf::from)
                })
                .collect::<Vec<_>>())
        } else {
            Ok(vec![relative_root.to_path_buf()])
        }
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(content.into())
    }
}
