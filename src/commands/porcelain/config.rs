use crate::areas::config::ConfigKey;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print the value of `key`, or set it when `value` is given
    pub fn configure(&self, key: &str, value: Option<&str>) -> RepositoryResult<()> {
        self.ensure_initialized()?;
        let key = ConfigKey::try_from(key)?;

        match value {
            Some(value) if !key.accepts(value) => {
                return Err(RepositoryError::InvalidIdentity(key.as_str()));
            }
            Some(value) => self.config().set(key, value)?,
            None => match self.config().get(key)? {
                Some(value) => writeln!(self.writer(), "{value}")
                    .context("Unable to write to output")?,
                None => tracing::info!(key = key.as_str(), "config key is not set"),
            },
        }

        Ok(())
    }
}
