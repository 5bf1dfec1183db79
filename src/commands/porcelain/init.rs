use crate::areas::index::Index;
use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository directory layout
    ///
    /// A failure midway removes whatever part of `.questgit` was created.
    pub fn init(&self) -> RepositoryResult<()> {
        self.init_with(Self::create_layout)
    }

    fn init_with(&self, layout: impl FnOnce(&Self) -> anyhow::Result<()>) -> RepositoryResult<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized(
                self.path().display().to_string(),
            ));
        }

        if let Err(error) = layout(self) {
            let repository_path = self.repository_path();
            if let Err(cleanup_error) = fs::remove_dir_all(&repository_path) {
                tracing::warn!(
                    path = %repository_path.display(),
                    "unable to clean up partial repository: {cleanup_error}"
                );
            }
            return Err(error.into());
        }

        tracing::info!(path = %self.path().display(), "repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty questgit repository in {}",
            self.repository_path().display()
        )
        .context("Unable to write to output")?;

        Ok(())
    }

    fn create_layout(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .questgit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .questgit/refs/heads directory")?;

        self.refs()
            .create_empty_branch(DEFAULT_BRANCH)
            .context("Failed to create default branch file")?;

        self.refs()
            .set_head(DEFAULT_BRANCH)
            .context("Failed to create initial HEAD reference")?;

        Index::load(self.index_path())?
            .save()
            .context("Failed to create .questgit/index file")?;

        Ok(())
    }
}
