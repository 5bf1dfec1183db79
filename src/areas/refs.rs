//! References (HEAD and branch heads)
//!
//! References are human-readable names pointing to commits:
//! - Direct: a file containing a commit hash (an empty file means "no commits yet")
//! - Symbolic: `ref: <path>`, as written to HEAD
//!
//! ## Layout
//!
//! - `HEAD`: `ref: refs/heads/<branch>`
//! - `refs/heads/<branch>`: head commit hash of the branch

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// References manager rooted at the repository directory (typically `.questgit`)
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

/// Content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref, relative to the repository directory
    SymRef(PathBuf),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef(PathBuf::from(&symref_match[1]))))
        } else {
            Ok(Some(SymRefOrOid::Oid(
                ObjectId::try_parse(content)
                    .with_context(|| format!("ref file {:?} holds no commit hash", path))?,
            )))
        }
    }
}

impl Refs {
    /// Name of the branch HEAD points to
    ///
    /// Falls back to the default branch when HEAD is missing or detached.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef(target)) => Ok(target
                .strip_prefix("refs/heads")
                .unwrap_or(&target)
                .to_string_lossy()
                .to_string()),
            Some(SymRefOrOid::Oid(_)) | None => Ok(DEFAULT_BRANCH.to_string()),
        }
    }

    /// Point HEAD at `branch`
    pub fn set_head(&self, branch: &str) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), &format!("ref: refs/heads/{branch}\n"))
    }

    /// Commit HEAD resolves to, following symbolic references
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.head_path())
    }

    /// Move the branch HEAD points to (or a detached HEAD) to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_symref(&self.head_path(), oid)
    }

    pub fn branch_exists(&self, branch: &str) -> bool {
        self.branch_path(branch)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Head commit of `branch`; `None` when the branch has no commits yet
    pub fn read_branch(&self, branch: &str) -> anyhow::Result<Option<ObjectId>> {
        let path = self
            .branch_path(branch)
            .with_context(|| format!("invalid branch name {branch}"))?;
        self.read_symref(&path)
    }

    /// Create an empty branch file if none exists
    pub fn create_empty_branch(&self, branch: &str) -> anyhow::Result<()> {
        let path = self
            .branch_path(branch)
            .with_context(|| format!("invalid branch name {branch}"))?;
        if !path.exists() {
            self.update_ref_file(&path, "")?;
        }

        Ok(())
    }

    /// Follow symbolic references until reaching a direct OID
    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef(target)) => self.read_symref(&self.path.join(target)),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    fn update_symref(&self, path: &Path, oid: &ObjectId) -> anyhow::Result<()> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef(target)) => {
                self.update_symref(&self.path.join(target), oid)
            }
            Some(SymRefOrOid::Oid(_)) | None => {
                self.update_ref_file(path, &format!("{oid}\n"))
            }
        }
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(raw_ref.as_bytes())
            .with_context(|| format!("failed to write ref file at {:?}", path))?;

        Ok(())
    }

    /// Path of a branch file, refusing names that would escape `refs/heads`
    fn branch_path(&self, branch: &str) -> Option<PathBuf> {
        let is_valid = !branch.is_empty()
            && !branch.starts_with('/')
            && !branch.ends_with('/')
            && branch
                .split('/')
                .all(|part| !part.is_empty() && part != "." && part != "..");

        is_valid.then(|| self.heads_path().join(branch))
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }
}
