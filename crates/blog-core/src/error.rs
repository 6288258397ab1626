//! Domain-level error types.

use thiserror::Error;

/// Domain errors - what the service layer reports to callers.
///
/// A missing row is not an error anywhere in this crate: repository reads
/// return `Option`/`bool` and the transport layer decides what absence means.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("storage operation timed out")]
    Timeout,

    #[error("failed to encode JSON column: {0}")]
    Serialize(String),
}
