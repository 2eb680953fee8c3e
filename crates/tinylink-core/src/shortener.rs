use crate::error::ShortenerError;
use crate::mapping::Mapping;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Assigns a unique short code to the given URL and returns the
    /// persisted mapping.
    ///
    /// Every successful call creates a new mapping, even for a URL that has
    /// already been shortened.
    async fn shorten(&self, url: &str) -> Result<Mapping>;
}
