//! # Validation Module
//!
//! Business rule validation for the inventory.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: API layer (out of scope)                                 │
//! │  └── Payload shape: field presence and types                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - data model rules                           │
//! │  └── Identifier present on registration, price never negative      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                        │
//! │  └── NOT NULL constraints, PRIMARY KEY uniqueness                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a registration identifier.
///
/// ## Rules
/// - Must be present: a book cannot be registered without a caller-chosen id
///
/// ## Returns
/// The unwrapped id.
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_book_id;
///
/// assert_eq!(validate_book_id(Some(42)), Ok(42));
/// assert!(validate_book_id(None).is_err());
/// ```
pub fn validate_book_id(id: Option<i64>) -> ValidationResult<i64> {
    id.ok_or(ValidationError::Required { field: "id" })
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
