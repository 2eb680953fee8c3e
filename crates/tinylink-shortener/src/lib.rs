//! URL shortener service implementation.
//!
//! This crate provides the assignment coordinator: it turns a URL into a
//! persisted mapping by trying the URL's deterministic candidate first and
//! falling back to a bounded number of random candidates on collision.

pub mod assignment;
pub mod service;

pub use assignment::AssignmentState;
pub use service::{ShortenerService, ShortenerSettings};
