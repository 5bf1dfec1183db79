use crate::areas::database::Database;
use crate::artifacts::core::lookup::ObjectLookup;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// A commit together with the ID it is stored under
#[derive(Debug, Clone, PartialEq, new)]
pub struct CommitRecord {
    pub oid: ObjectId,
    pub commit: Commit,
}

/// Newest-first iterator over the parent chain starting at `start`
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start: Option<ObjectId>,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = CommitRecord;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = CommitRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_commit(&commit_oid) {
            Ok(ObjectLookup::Found(commit)) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(CommitRecord::new(commit_oid, commit))
            }
            Ok(ObjectLookup::NotFound) => {
                tracing::warn!(oid = %commit_oid, "history is broken: commit not found");
                None
            }
            Ok(ObjectLookup::Corrupt) => {
                tracing::warn!(oid = %commit_oid, "history is broken: commit is unreadable");
                None
            }
            Err(error) => {
                tracing::warn!(oid = %commit_oid, "history walk stopped: {error:#}");
                None
            }
        }
    }
}
