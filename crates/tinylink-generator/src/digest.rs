use crate::error::GeneratorError;
use sha2::{Digest, Sha256, Sha512};
use std::fmt::Display;
use std::str::FromStr;

/// Content digest used to derive deterministic candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    /// Hashes `input` and folds the first 16 bytes of the digest into a
    /// big-endian `u128`.
    pub fn digest_u128(self, input: &[u8]) -> u128 {
        let mut prefix = [0u8; 16];
        match self {
            DigestAlgorithm::Sha256 => prefix.copy_from_slice(&Sha256::digest(input)[..16]),
            DigestAlgorithm::Sha512 => prefix.copy_from_slice(&Sha512::digest(input)[..16]),
        }
        u128::from_be_bytes(prefix)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            other => Err(GeneratorError::UnknownDigest(other.to_string())),
        }
    }
}
