use crate::Result;
use async_trait::async_trait;
use tinylink_core::{Mapping, ShortCode};

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored mapping.
    /// Returns `Err(NotFound)` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Mapping>;
}
