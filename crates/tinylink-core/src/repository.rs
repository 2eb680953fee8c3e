use crate::error::StorageError;
use crate::mapping::Mapping;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a mapping store.
///
/// The redirector only needs point lookups, so it is handed this trait
/// rather than the full [`Repository`].
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the mapping for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>>;
}

/// The mapping store: the single source of truth for short code uniqueness.
///
/// The store is write-once per key. There is no update or delete.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Persists a new mapping and returns it with its store-assigned id.
    ///
    /// Returns `Err(StorageError::Conflict)` if the code already exists. The
    /// existence check and the write must be one indivisible operation.
    async fn insert(&self, code: &ShortCode, original_url: &str) -> Result<Mapping>;
}

#[async_trait]
impl<T: ReadRepository + ?Sized> ReadRepository for std::sync::Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>> {
        (**self).get(code).await
    }
}

#[async_trait]
impl<T: Repository + ?Sized> Repository for std::sync::Arc<T> {
    async fn insert(&self, code: &ShortCode, original_url: &str) -> Result<Mapping> {
        (**self).insert(code, original_url).await
    }
}
