//! Domain error types.
//!
//! One taxonomy for everything the service layer can surface to the
//! excluded transport layer: missing records, invalid input, and storage
//! failures propagated unchanged.

use thiserror::Error;

use crate::types::Id;

/// Domain-level error for service operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{entity} not found with id={id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        Self::NotFound { entity, id }
    }
}
