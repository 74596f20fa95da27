//! Error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is not a well-formed UUID
    #[error("Invalid {entity_type} ID: {raw}")]
    InvalidId {
        entity_type: &'static str,
        raw: String,
    },
}

impl DomainError {
    /// Creates an invalid-identifier error, keeping the offending input for logs.
    pub fn invalid_id(entity_type: &'static str, raw: impl Into<String>) -> Self {
        Self::InvalidId {
            entity_type,
            raw: raw.into(),
        }
    }
}
