use thiserror::Error;

/// Errors related to the core functionality of the URL shortener service.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// A URL rejected before any store interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid url: {0}")]
pub struct InvalidUrlError(pub String);

/// Errors reported by a mapping store.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The short code is already taken. Raised atomically by the store's
    /// uniqueness constraint, never by a separate existence check.
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("failed to assign a unique short code after {attempts} attempts")]
    AssignmentExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<InvalidUrlError> for ShortenerError {
    fn from(value: InvalidUrlError) -> Self {
        Self::InvalidUrl(value.0)
    }
}
