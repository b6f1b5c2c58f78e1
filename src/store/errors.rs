//! # Store Errors
//!
//! Error types for beer store operations. All errors are terminal for the
//! request that produced them; nothing is retried.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Beer store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record exists for the given id
    #[error("no beer found for the given id")]
    NotFound,

    /// A required field was absent from the payload
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Price must be zero or positive
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),

    /// Internal store failure
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Whether this error rejects the caller's payload
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField(_) | StoreError::NegativePrice(_)
        )
    }
}
