use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tinylink_core::ShortenerError;
use tinylink_redirector::RedirectorError;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced to HTTP clients.
///
/// Creation failures separate bad input (400) from an exhausted code space
/// or a broken store (500). Every resolve failure on a code is a 404.
/// Bodies that fail JSON extraction keep the extractor's status.
#[derive(Debug)]
pub enum AppError {
    InvalidUrl(String),
    Rejected { status: StatusCode, detail: String },
    NotFound,
    AssignmentExhausted,
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::InvalidUrl(message) => AppError::InvalidUrl(message),
            ShortenerError::AssignmentExhausted { .. } => AppError::AssignmentExhausted,
            ShortenerError::Storage(source) => AppError::Internal(source.to_string()),
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(value: RedirectorError) -> Self {
        match value {
            RedirectorError::NotFound(_) => AppError::NotFound,
            RedirectorError::Storage(source) => AppError::Internal(source.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::InvalidUrl(message) => {
                (StatusCode::BAD_REQUEST, format!("invalid url: {message}"))
            }
            AppError::Rejected { status, detail } => (status, detail),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Short URL not found".to_string()),
            AppError::AssignmentExhausted => {
                error!("short code space exhausted for request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate unique short code".to_string(),
                )
            }
            AppError::Internal(message) => {
                error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
