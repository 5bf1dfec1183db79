use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use derive_new::new;

/// How a staged path relates to the file currently on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedState {
    /// On disk with exactly the staged content
    Captured,
    /// Staged but no longer a file on disk
    Missing,
    /// On disk with content that differs from what was staged
    Modified,
    /// Under an ignored directory
    Ignored,
}

/// Tree ready to be stored, plus the index entries it captured
#[derive(Debug, Clone)]
pub struct Snapshot {
    tree: Tree,
    captured: Vec<IndexEntry>,
}

impl Snapshot {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Entries whose on-disk content matched the staged hash
    pub fn captured(&self) -> &[IndexEntry] {
        &self.captured
    }
}

#[derive(Debug, new)]
pub struct TreeBuilder<'w> {
    workspace: &'w Workspace,
}

impl TreeBuilder<'_> {
    pub fn classify(&self, entry: &IndexEntry) -> anyhow::Result<StagedState> {
        if self.workspace.is_ignored(&entry.path) {
            return Ok(StagedState::Ignored);
        }
        if !self.workspace.exists(&entry.path) {
            return Ok(StagedState::Missing);
        }

        let content = self.workspace.read_file(&entry.path)?;
        if Blob::new(content).object_id()? == entry.oid {
            Ok(StagedState::Captured)
        } else {
            Ok(StagedState::Modified)
        }
    }

    /// Staged entries that can be committed as they are right now
    ///
    /// Everything else stays staged for a later attempt and is reported.
    pub fn resolve(&self, index: &Index) -> anyhow::Result<Vec<IndexEntry>> {
        let mut committable = Vec::new();

        for entry in index.entries() {
            match self.classify(entry)? {
                StagedState::Captured => committable.push(entry.clone()),
                StagedState::Missing => tracing::warn!(
                    path = %entry.path.display(),
                    "staged file is missing from the working tree, leaving it out of this commit"
                ),
                StagedState::Modified => tracing::warn!(
                    path = %entry.path.display(),
                    "file changed since it was staged, leaving it out of this commit"
                ),
                StagedState::Ignored => tracing::warn!(
                    path = %entry.path.display(),
                    "staged file is inside an ignored directory, leaving it out of this commit"
                ),
            }
        }

        Ok(committable)
    }

    /// Build the root tree for the next commit
    ///
    /// Fails with `NothingToCommit` when no staged path is committable.
    pub fn build(&self, index: &Index) -> RepositoryResult<Snapshot> {
        let captured = self.resolve(index)?;
        if captured.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }

        let tree = Tree::build(&captured)?;

        Ok(Snapshot { tree, captured })
    }
}
