//! Error-to-response mapping.
//!
//! Every failure leaves the server as `{"error": "<message>"}` with the
//! status the error class dictates. Write-path storage failures map to 400
//! (they stem from the request body), read-path failures to 500.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use blog_shared::ErrorBody;

/// Application-level error type for the HTTP layer.
#[derive(Debug)]
pub enum AppError {
    /// The id path segment was not a positive integer.
    InvalidId,
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl AppError {
    /// Wrap a write-path failure (validation or storage) as a 400.
    pub fn bad_request(err: impl fmt::Display) -> Self {
        AppError::BadRequest(err.to_string())
    }

    /// Wrap a read-path storage failure as a 500.
    pub fn internal(err: impl fmt::Display) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidId => write!(f, "invalid id"),
            AppError::NotFound => write!(f, "not found"),
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(msg) = self {
            tracing::error!("request failed: {msg}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
