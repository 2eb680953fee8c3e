use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::error::StorageError;
use tinylink_core::repository::{ReadRepository, Repository, Result};
use tinylink_core::{Mapping, MappingId, ShortCode};
use tracing::trace;

/// In-memory implementation of the mapping store using DashMap.
///
/// Inserts go through the entry API, which holds the key's shard lock for
/// the whole check-and-write, so two concurrent inserts of the same code
/// cannot both succeed. Ids are allocated only once the slot is known to be
/// vacant, so a rejected insert never consumes one.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Mapping>,
    next_id: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<Mapping>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, original_url: &str) -> Result<Mapping> {
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "short code already taken");
                Err(StorageError::Conflict(code.to_string()))
            }
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                let mapping = Mapping {
                    id: MappingId::new(id),
                    original_url: original_url.to_owned(),
                    short_code: code.clone(),
                };
                slot.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }
}
