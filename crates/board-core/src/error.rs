//! Domain-level error types.

use thiserror::Error;

use crate::ports::KvError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(RepoError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Storage backend failed: {0}")]
    Backend(#[from] KvError),

    #[error("Corrupt record {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidArgument(msg) => DomainError::Validation(msg),
            other => DomainError::Store(other),
        }
    }
}
