//! Structured error types for postboard-core.
//!
//! Every variant is an expected, recoverable outcome of a store operation.
//! The HTTP layer maps each one onto a status code and JSON body; nothing
//! here is fatal and no failing operation leaves the store half-mutated.

use thiserror::Error;

/// Which query parameter was rejected, and with what value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    /// `sort` was something other than `title` or `content`
    #[error("unsupported sort field '{value}'")]
    SortField { value: String },

    /// `direction` was something other than `asc` or `desc`
    #[error("unsupported direction '{value}'")]
    Direction { value: String },
}

/// Main error type for postboard-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Required creation fields were absent
    #[error("missing fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// A sort field or direction was not recognized
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// No post carries the requested id
    #[error("post {id} not found")]
    NotFound { id: u64 },
}

/// Result type alias for postboard-core operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a validation error listing the missing field names
    pub fn missing_fields(missing: Vec<&'static str>) -> Self {
        Self::Validation { missing }
    }

    /// Create a not-found error
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Create an unsupported sort field error
    pub fn sort_field(value: impl Into<String>) -> Self {
        Self::InvalidParameter(InvalidParameter::SortField {
            value: value.into(),
        })
    }

    /// Create an unsupported direction error
    pub fn direction(value: impl Into<String>) -> Self {
        Self::InvalidParameter(InvalidParameter::Direction {
            value: value.into(),
        })
    }
}
