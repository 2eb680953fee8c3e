use std::sync::Arc;

use crate::error::RedirectorError;
use crate::redirector::Redirector;
use async_trait::async_trait;
use tinylink_core::{Mapping, ReadRepository, ShortCode};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only repository; resolving never mutates the store.
#[derive(Debug)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> crate::Result<Mapping> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(mapping) => {
                debug!(code = %code, url = %mapping.original_url, "resolved short code");
                Ok(mapping)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(RedirectorError::NotFound(code.to_string()))
            }
        }
    }
}
