//! # Error Types
//!
//! Validation error types for libris-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  libris-core errors (this file)                                    │
//! │  └── ValidationError  - Input rule failures                        │
//! │                                                                     │
//! │  libris-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                │
//! │                                                                     │
//! │  libris-service errors (separate crate)                            │
//! │  └── ServiceError     - What the API layer sees                    │
//! │                                                                     │
//! │  Flow: ValidationError ─┐                                          │
//! │        DbError ─────────┴──► ServiceError ──► API layer            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur when a caller-supplied value does not meet the data model's
/// requirements, before any business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "id" };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("price must be between 0"));
    }
}
