use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("short code cannot be empty")]
    EmptyShortCode,
}

/// Failures raised while deriving an identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("instant {0} is before the unix epoch and cannot be encoded")]
    NegativeInstant(i64),
}

/// Failures raised by a link store backend.
///
/// The in-memory store never fails; these exist for backends that can.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("failed to generate short code: {0}")]
    Encoding(#[from] EncodingError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
