//! Mapping store backends for the Tinylink URL shortener.
//!
//! Both backends enforce short code uniqueness inside the store itself:
//! [`InMemoryRepository`] through a sharded map's entry API and
//! [`MySqlRepository`] through a unique index on `urls.short_code`.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use tinylink_core::{ReadRepository, Repository, StorageError};
