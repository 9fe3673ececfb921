//! Error handling - maps domain failures to `{error}` JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use osuda_shared::ErrorBody;
use std::fmt;

/// Application-level error type carried out of handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg) => ErrorBody::new(msg.clone()),
            AppError::BadRequest(msg) => ErrorBody::new(msg.clone()),
            AppError::Internal(msg) => {
                // Log internal errors, keep the wire message generic
                tracing::error!("Internal error: {}", msg);
                ErrorBody::new("Internal server error.")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<osuda_core::DomainError> for AppError {
    fn from(err: osuda_core::DomainError) -> Self {
        match err {
            osuda_core::DomainError::NotFound(_) => {
                AppError::NotFound("Post not found.".to_string())
            }
            osuda_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<osuda_core::error::StorageError> for AppError {
    fn from(err: osuda_core::error::StorageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
