use shortly_core::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("no short url for id: {0}")]
    NotFound(String),
    #[error("storage operation failed: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}
