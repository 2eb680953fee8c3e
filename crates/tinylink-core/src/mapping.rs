use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier of a [`Mapping`].
///
/// Identifiers are handed out monotonically by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingId(u64);

impl MappingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for MappingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted redirect mapping.
///
/// Created exactly once by a successful store insert and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Identifier assigned by the store.
    pub id: MappingId,
    /// The normalized absolute URL the code redirects to.
    pub original_url: String,
    /// The globally unique short code.
    pub short_code: ShortCode,
}
