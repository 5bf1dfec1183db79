use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the blob ID of `object_path`, storing the blob when `write` is set
    pub fn hash_object(&self, object_path: &str, write: bool) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let object = Blob::new(self.workspace().read_file(Path::new(object_path))?);
        if object.is_empty() {
            return Err(RepositoryError::EmptyContent);
        }

        let object_id = if write {
            self.database().store_object(&object)?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{object_id}").context("Unable to write to output")?;

        Ok(())
    }
}
