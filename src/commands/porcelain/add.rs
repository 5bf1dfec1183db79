use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::index::index_entry::is_recordable;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    pub fn add(&self, paths: &[String]) -> RepositoryResult<()> {
        let mut index = self.load_index()?;

        let staged = self.stage(&mut index, paths)?;
        if index.is_changed() {
            index.save()?;
        }

        writeln!(self.writer(), "staged {staged} file(s)").context("Unable to write to output")?;

        Ok(())
    }

    /// Stage every file under `paths` whose content differs from its index entry
    ///
    /// Returns how many entries were added or updated. Relative paths are taken
    /// from the repository root; directories expand recursively.
    pub fn stage(&self, index: &mut Index, paths: &[String]) -> RepositoryResult<usize> {
        let mut files = Vec::new();
        for path in paths {
            let full_path = self.path().join(path);
            if !full_path.exists() {
                tracing::warn!(path = %path, "pathspec did not match any files");
                continue;
            }
            files.extend(self.workspace().list_files(Some(full_path))?);
        }
        files.retain(|file| {
            let recordable = is_recordable(file);
            if !recordable {
                tracing::warn!(path = ?file, "skipping path with a line break");
            }
            recordable
        });

        if files.is_empty() {
            return Err(RepositoryError::NothingToStage);
        }

        let mut staged = 0;
        for file in dedup_sorted(files) {
            let blob = Blob::new(self.workspace().read_file(&file)?);
            if blob.is_empty() {
                tracing::warn!(path = %file.display(), "skipping empty file");
                continue;
            }

            let blob_id = blob.object_id()?;
            if index.get_entry(&file) == Some(&blob_id) {
                continue;
            }

            self.database().store_object(&blob)?;
            tracing::debug!(path = %file.display(), oid = %blob_id, "staged");
            index.add_entry(file, blob_id);
            staged += 1;
        }

        Ok(staged)
    }
}

fn dedup_sorted(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.sort();
    files.dedup();
    files
}
