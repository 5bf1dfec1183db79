use crate::artifacts::core::error::RepositoryError;

/// Outcome of reading something that may legitimately be absent.
///
/// `NotFound` and `Corrupt` are both "unavailable" for most callers, but they are
/// kept apart so that a missing object is never confused with an unreadable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectLookup<T> {
    Found(T),
    NotFound,
    Corrupt,
}

impl<T> ObjectLookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            ObjectLookup::Found(value) => Some(value),
            ObjectLookup::NotFound | ObjectLookup::Corrupt => None,
        }
    }

    /// Chain a fallible step that can itself conclude the data is corrupt.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ObjectLookup<U>) -> ObjectLookup<U> {
        match self {
            ObjectLookup::Found(value) => f(value),
            ObjectLookup::NotFound => ObjectLookup::NotFound,
            ObjectLookup::Corrupt => ObjectLookup::Corrupt,
        }
    }

    /// Turn absence and corruption into errors naming `id`.
    pub fn require(self, id: &str) -> Result<T, RepositoryError> {
        match self {
            ObjectLookup::Found(value) => Ok(value),
            ObjectLookup::NotFound => Err(RepositoryError::ObjectNotFound(id.to_string())),
            ObjectLookup::Corrupt => Err(RepositoryError::CorruptObject(id.to_string())),
        }
    }
}
