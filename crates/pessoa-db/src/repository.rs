//! Repository error types.
//!
//! Storage failures propagate unchanged to the caller; the core performs no
//! retries. The in-memory store never fails, but the executor signatures
//! keep the failure channel so a real adapter can slot in.

use pessoa_core::DomainError;

/// Error type for storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Result type for storage operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::Storage(err.to_string())
    }
}
