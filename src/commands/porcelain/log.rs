use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::log::rev_list::{CommitRecord, RevList};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Branch name, `HEAD`, or a full commit hash; defaults to `HEAD`
    pub revision: Option<String>,
    pub max_count: Option<usize>,
    pub oneline: bool,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> RepositoryResult<()> {
        self.ensure_initialized()?;
        let revision = opts.revision.as_deref().unwrap_or(HEAD_REF_NAME);
        if !self.revision_exists(revision) {
            return Err(RepositoryError::UnknownRevision(revision.to_string()));
        }

        let records = self.get_log(revision, opts.max_count)?;
        if records.is_empty() {
            tracing::info!(revision, "no commits yet");
        }

        for (position, record) in records.iter().enumerate() {
            if opts.oneline {
                self.show_commit_oneline(record)?;
            } else {
                if position > 0 {
                    writeln!(self.writer()).context("Unable to write to output")?;
                }
                self.show_commit_medium(record)?;
            }
        }

        Ok(())
    }

    /// Commit a ref name points to
    ///
    /// `HEAD` and branch names resolve through their ref files (an empty branch
    /// resolves to `None`). Any other name resolves only if it is the hash of a
    /// stored object.
    pub fn resolve_ref(&self, name: &str) -> RepositoryResult<Option<ObjectId>> {
        if name == HEAD_REF_NAME {
            return Ok(self.refs().read_head()?);
        }
        if self.refs().branch_exists(name) {
            return Ok(self.refs().read_branch(name)?);
        }
        if self.database().exists(name) {
            return Ok(Some(ObjectId::try_parse(name)?));
        }

        Ok(None)
    }

    /// Up to `max_count` commits reachable from `name`, newest first
    ///
    /// A missing or unreadable commit ends the walk early; the records gathered
    /// until then are returned.
    pub fn get_log(
        &self,
        name: &str,
        max_count: Option<usize>,
    ) -> RepositoryResult<Vec<CommitRecord>> {
        self.ensure_initialized()?;
        let start = self.resolve_ref(name)?;

        Ok(RevList::new(self.database(), start)
            .into_iter()
            .take(max_count.unwrap_or(usize::MAX))
            .collect())
    }

    fn revision_exists(&self, name: &str) -> bool {
        name == HEAD_REF_NAME || self.refs().branch_exists(name) || self.database().exists(name)
    }

    fn show_commit_medium(&self, record: &CommitRecord) -> RepositoryResult<()> {
        let mut writer = self.writer();
        write_commit_medium(&mut **writer, record).context("Unable to write to output")?;

        Ok(())
    }

    fn show_commit_oneline(&self, record: &CommitRecord) -> RepositoryResult<()> {
        writeln!(
            self.writer(),
            "{} {}",
            record.oid.to_short_oid().yellow(),
            record.commit.short_message()
        )
        .context("Unable to write to output")?;

        Ok(())
    }
}

fn write_commit_medium(writer: &mut dyn Write, record: &CommitRecord) -> std::io::Result<()> {
    let author = record.commit.author();

    writeln!(writer, "{}", format!("commit {}", record.oid).yellow())?;
    writeln!(writer, "Author: {}", author.display_name())?;
    writeln!(writer, "Date:   {}", author.readable_timestamp())?;
    writeln!(writer)?;
    for line in record.commit.message().lines() {
        writeln!(writer, "    {line}")?;
    }

    Ok(())
}
