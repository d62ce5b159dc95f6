use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shortly_core::{ShortenerError, StorageError};
use shortly_redirector::RedirectorError;
use thiserror::Error;
use tracing::{error, info, warn};

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures surfaced by the HTTP handlers.
///
/// Each variant maps to a fixed status code and is logged when turned into
/// a response. Responses carry no body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not read request body: {0}")]
    UnreadableBody(String),
    #[error("failed to parse request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("no id given, can't redirect")]
    MissingId,
    #[error("no short url for the given id: {0}")]
    NotFound(String),
    #[error("failed to create short url: {0}")]
    Shortener(#[from] ShortenerError),
    #[error("failed to resolve short url: {0}")]
    Storage(StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnreadableBody(_) | AppError::MissingId => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NO_CONTENT,
            AppError::MalformedBody(_) | AppError::Shortener(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(value: RedirectorError) -> Self {
        match value {
            RedirectorError::NotFound(id) => AppError::NotFound(id),
            RedirectorError::Storage(source) => AppError::Storage(source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound(_) => info!(status = %status, error = %self, "lookup missed"),
            _ if status.is_server_error() => {
                error!(status = %status, error = %self, "request failed")
            }
            _ => warn!(status = %status, error = %self, "request rejected"),
        }
        status.into_response()
    }
}
