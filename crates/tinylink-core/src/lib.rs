//! Core types and traits for the Tinylink URL shortener.
//!
//! This crate provides the domain types shared by the shortener, the
//! redirector and the storage backends: short codes, persisted mappings,
//! normalized target URLs and the mapping store contract.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;
pub mod shortener;
pub mod target;

pub use error::{CoreError, InvalidUrlError, ShortenerError, StorageError};
pub use mapping::{Mapping, MappingId};
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use target::TargetUrl;
