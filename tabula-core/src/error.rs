//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Value item index out of range
    #[error("Value item not found at index {index}")]
    ValueItemNotFound { index: usize },

    /// Validation error (blank name, blank value text, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error (seed data)
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not
    /// exist) -- used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level
    /// `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_) | Self::ValueItemNotFound { .. } | Self::Validation(_) => true,
            Self::Serialization(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
