use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("code length must be between {min} and {max}, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("unknown digest algorithm: {0}")]
    UnknownDigest(String),
}
