use thiserror::Error;

/// Failures surfaced by repository operations.
///
/// Expected absences never show up here: reads return an
/// [`ObjectLookup`](crate::artifacts::core::lookup::ObjectLookup) instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not a questgit repository (or any of the parent directories): {0}")]
    NotARepository(String),

    #[error("repository already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("nothing to stage: no readable files matched the given paths")]
    NothingToStage,

    #[error("nothing to commit (no staged file still matches the working tree)")]
    NothingToCommit,

    #[error("missing identity configuration: `{0}` is not set (try `questgit config {0} <value>`)")]
    MissingIdentity(&'static str),

    #[error("invalid identity: `{0}` must be a single line without '<' or '>'")]
    InvalidIdentity(&'static str),

    #[error("refusing to hash empty content")]
    EmptyContent,

    #[error("unknown revision or branch: {0}")]
    UnknownRevision(String),

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("object {0} is corrupt")]
    CorruptObject(String),

    #[error(transparent)]
    IoFailure(#[from] anyhow::Error),
}

impl RepositoryError {
    /// Whether the failure was a precondition check rather than a broken disk or repository.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RepositoryError::NothingToStage
                | RepositoryError::NothingToCommit
                | RepositoryError::MissingIdentity(_)
                | RepositoryError::InvalidIdentity(_)
                | RepositoryError::EmptyContent
        )
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
