use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Pretty-print the body of the object named by `object_id`
    pub fn cat_file(&self, object_id: &str) -> RepositoryResult<()> {
        self.ensure_initialized()?;
        let oid = ObjectId::try_parse(object_id)
            .map_err(|_| RepositoryError::ObjectNotFound(object_id.to_string()))?;

        let object = self.database().parse_object(&oid)?.require(oid.as_ref())?;
        let content = object.display();

        let mut writer = self.writer();
        write!(writer, "{content}").context("Unable to write to output")?;
        if !content.ends_with('\n') {
            writeln!(writer).context("Unable to write to output")?;
        }

        Ok(())
    }
}
