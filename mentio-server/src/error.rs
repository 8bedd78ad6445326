//! Error handling for the Mentio server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Mentio library error
    #[error("Mentio error: {0}")]
    Mentio(#[from] mentio::MentioError),

    /// Bad request error
    #[error("Bad request: {0}")]
    #[allow(dead_code)]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Mentio(mentio::MentioError::BatchTooLarge { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Mentio(mentio::MentioError::BatchTooLarge { .. }) => "batch_too_large",
            ServerError::Mentio(_) => "mentio_error",
            ServerError::BadRequest(_) => "bad_request",
            ServerError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
