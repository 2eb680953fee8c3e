use crate::base62::{encode_digits, MAX_DIGITS};
use crate::digest::DigestAlgorithm;
use crate::error::GeneratorError;
use crate::CodeGenerator;
use rand::distr::Alphanumeric;
use rand::Rng;
use tinylink_core::shortcode::MIN_LENGTH;
use tinylink_core::ShortCode;
use typed_builder::TypedBuilder;

pub const DEFAULT_CODE_LENGTH: usize = 7;

#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorSettings {
    /// Number of characters in every generated code.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    length: usize,
    /// Digest used for deterministic candidates.
    #[builder(default)]
    digest: DigestAlgorithm,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Generator deriving candidates from a content digest, with a uniform
/// random alphanumeric fallback.
///
/// The deterministic candidate is the digest of the URL, truncated to the
/// configured length in base62. Distinct URLs can share a candidate; the
/// store rejects the second insert and the caller falls back to
/// [`random_code`](CodeGenerator::random_code).
#[derive(Debug, Clone)]
pub struct ContentHashGenerator {
    length: usize,
    digest: DigestAlgorithm,
}

impl ContentHashGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_DIGITS).contains(&settings.length) {
            return Err(GeneratorError::InvalidLength {
                min: MIN_LENGTH,
                max: MAX_DIGITS,
                actual: settings.length,
            });
        }

        Ok(Self {
            length: settings.length,
            digest: settings.digest,
        })
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }
}

impl CodeGenerator for ContentHashGenerator {
    fn deterministic_code(&self, url: &str) -> ShortCode {
        let value = self.digest.digest_u128(url.as_bytes());
        ShortCode::new_unchecked(encode_digits(value, self.length))
    }

    fn random_code(&self) -> ShortCode {
        let code: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
