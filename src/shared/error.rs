//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every error renders as
//! the standard response envelope so no failure leaves a handler unformatted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::response::ApiResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure. The message is shown to the client, so it must
    /// not carry internal details.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => {
                tracing::debug!(status = status.as_u16(), reason = %msg, "Request failed");
                ApiResponse::fail(msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiResponse::error(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}
