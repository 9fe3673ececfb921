//! Domain-level error types.

use thiserror::Error;

/// Domain errors - journal business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    NotFound(u64),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored collection is not valid JSON: {0}")]
    Serialization(String),
}
