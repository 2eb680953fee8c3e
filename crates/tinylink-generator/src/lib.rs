pub mod base62;
pub mod content;
pub mod digest;
pub mod error;

pub use content::{ContentHashGenerator, GeneratorSettings};
pub use digest::DigestAlgorithm;
pub use error::GeneratorError;

use tinylink_core::ShortCode;

/// Trait for producing short code candidates.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is enforced by the store, and the caller retries on conflict.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Derives a candidate purely from the URL's content.
    ///
    /// The same URL must always yield the same candidate.
    fn deterministic_code(&self, url: &str) -> ShortCode;

    /// Draws a fresh candidate independently of any input.
    fn random_code(&self) -> ShortCode;
}
