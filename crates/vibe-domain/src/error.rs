//! Domain error types

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required input fields are empty
    #[error("Missing required field(s): {}", .fields.join(", "))]
    Validation {
        /// Names of the missing fields, in form order
        fields: Vec<&'static str>,
    },

    /// AI rating outside the 1-10 range
    #[error("AI rating must be between 1 and 10, got {0}")]
    InvalidRating(i64),

    /// An entry violates a catalog invariant
    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry {
        /// Offending entry id
        id: String,
        /// Violated invariant
        reason: String,
    },
}
