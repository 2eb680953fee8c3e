//! Redirector service library.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes
//! to their original URLs with a single point lookup against the mapping
//! store. There is no cache in front of the store.

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
