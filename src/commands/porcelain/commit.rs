use crate::areas::config::ConfigKey;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::snapshot::tree_builder::TreeBuilder;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::io::Write;

const AUTHOR_NAME_ENV: &str = "GIT_AUTHOR_NAME";
const AUTHOR_EMAIL_ENV: &str = "GIT_AUTHOR_EMAIL";
const AUTHOR_DATE_ENV: &str = "GIT_AUTHOR_DATE";

impl Repository {
    pub fn commit(&self, message: &str) -> RepositoryResult<()> {
        let mut index = self.load_index()?;
        let is_root = self.refs().read_head()?.is_none();

        let commit_id = self.create_commit(&mut index, message)?;

        let root_marker = if is_root { "(root-commit) " } else { "" };
        let subject = message.trim().lines().next().unwrap_or_default();
        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            self.refs().current_branch()?,
            root_marker,
            commit_id.to_short_oid(),
            subject
        )
        .context("Unable to write to output")?;

        Ok(())
    }

    /// Record the committable part of `index` as a new commit on the current branch
    ///
    /// Identity is checked before anything is written. Entries captured by the
    /// commit leave the index; drifted ones stay staged.
    pub fn create_commit(&self, index: &mut Index, message: &str) -> RepositoryResult<ObjectId> {
        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }

        let author = self.resolve_author()?;
        let snapshot = TreeBuilder::new(self.workspace()).build(index)?;

        let tree = snapshot.tree();
        let tree_id = tree.object_id()?;
        let mut store_tree = |tree: &Tree| self.database().store_object(tree).map(|_| ());
        tree.traverse(&mut store_tree)?;

        let parent = self.refs().read_head()?;
        let commit = Commit::new(parent, tree_id, author, message.trim().to_string());
        let commit_id = self.database().store_object(&commit)?;
        self.refs().update_head(&commit_id)?;

        for entry in snapshot.captured() {
            index.remove_entry(&entry.path);
        }
        index.save()?;

        tracing::info!(
            oid = %commit_id,
            files = snapshot.captured().len(),
            still_staged = index.len(),
            "created commit"
        );

        Ok(commit_id)
    }

    /// Author for the next commit: `GIT_AUTHOR_*` variables first, then the config file
    pub fn resolve_author(&self) -> RepositoryResult<Author> {
        self.resolve_author_with(|name| std::env::var(name).ok())
    }

    fn resolve_author_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> RepositoryResult<Author> {
        let lookup = |env_name: &str, key: ConfigKey| -> RepositoryResult<String> {
            let value = match env(env_name).filter(|value| !value.trim().is_empty()) {
                Some(value) => Some(value.trim().to_string()),
                None => self.config().get(key)?,
            };

            let value = value.ok_or(RepositoryError::MissingIdentity(key.as_str()))?;
            if !key.accepts(&value) {
                return Err(RepositoryError::InvalidIdentity(key.as_str()));
            }

            Ok(value)
        };

        let name = lookup(AUTHOR_NAME_ENV, ConfigKey::UserName)?;
        let email = lookup(AUTHOR_EMAIL_ENV, ConfigKey::UserEmail)?;

        match env(AUTHOR_DATE_ENV).filter(|value| !value.trim().is_empty()) {
            Some(date) => Ok(Author::new_with_timestamp(
                name,
                email,
                parse_author_date(date.trim())?,
            )),
            None => Ok(Author::new(name, email)),
        }
    }
}

/// Accepts `2024-01-31 12:00:00 +0200` or an RFC 2822 date
fn parse_author_date(date: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z")
        .or_else(|_| DateTime::parse_from_rfc2822(date))
        .map(|date| date.with_timezone(&Utc))
        .with_context(|| format!("invalid {AUTHOR_DATE_ENV}: {date}"))
}
