//! # Service Error Type
//!
//! The error surface of the inventory service.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Libris                             │
//! │                                                                     │
//! │  API layer                    Service                               │
//! │  ─────────                    ───────                               │
//! │                                                                     │
//! │  POST /books ──────────────►  register_book(dto)                   │
//! │                                    │                                │
//! │                                    ▼                                │
//! │  409 ◄── DuplicateResource ── id already registered                │
//! │  404 ◄── BookNotFound ─────── restock/get on missing id            │
//! │  400 ◄── IdMismatch ───────── update payload id ≠ target id        │
//! │  400 ◄── Validation ───────── missing id, negative price           │
//! │  500 ◄── Db ───────────────── everything else, unclassified        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures pass through without recovery or retry: every operation
//! either fully commits its effect or raises before any persisted change.

use thiserror::Error;

use libris_core::ValidationError;
use libris_db::DbError;

/// Errors returned by the inventory service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Registration attempted for an id that already exists (409).
    #[error(
        "Book with id {id} is already registered. \
         Use restock or update_book to modify it instead"
    )]
    DuplicateResource { id: i64 },

    /// Lookup or restock on an id with no record (404).
    #[error("Book with id {id} is not registered. Use register_book to register it first")]
    BookNotFound { id: i64 },

    /// Update payload carries an id that differs from the target id (400).
    #[error("Id cannot be updated.")]
    IdMismatch,

    /// Input failed a data-model rule (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store failure, passed through unclassified (500).
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_id_and_alternatives() {
        let msg = ServiceError::DuplicateResource { id: 7 }.to_string();
        assert!(msg.contains("id 7"));
        assert!(msg.contains("restock"));
        assert!(msg.contains("update_book"));
    }

    #[test]
    fn test_not_found_message_directs_to_registration() {
        let msg = ServiceError::BookNotFound { id: 7 }.to_string();
        assert!(msg.contains("id 7"));
        assert!(msg.contains("register_book"));
    }

    #[test]
    fn test_id_mismatch_message() {
        assert_eq!(ServiceError::IdMismatch.to_string(), "Id cannot be updated.");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ServiceError = ValidationError::Required { field: "id" }.into();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
