//! Unified error type for the API.
//!
//! Handlers return `ApiResult<T>`; every `ApiError` variant maps to one fixed
//! HTTP status with a human-readable `{"detail": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required fields on a user request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Referenced user or task does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username (409).
    #[error("{0}")]
    Conflict(String),

    /// Missing or empty required fields on a task request (422).
    #[error("{0}")]
    Unprocessable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let detail = self.to_string();
        tracing::debug!(status = %status, %detail, "request rejected");

        (status, Json(ErrorBody { detail })).into_response()
    }
}
