//! # Domain Types
//!
//! The persisted entity of the Libris inventory.
//!
//! ## Identity
//! A book's `id` is chosen by the caller at registration time and is never
//! generated or changed by this system. It doubles as the primary key and as
//! searchable text (the keyword search matches against its decimal form).

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A registered book and its stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Caller-supplied identifier. Primary key, immutable once registered.
    pub id: i64,

    /// Title shown in listings and matched by keyword search.
    pub title: String,

    /// Author, matched case-insensitively by keyword search.
    pub author: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category, persisted as its integer code.
    pub category: Category,

    /// Quantity currently in stock.
    pub total_count: i64,
}

impl Book {
    /// Checks whether any stock is available.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.total_count > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 1,
            title: "Go Deep".to_string(),
            author: "Ada".to_string(),
            price_cents: 1000,
            category: Category::Technology,
            total_count: 2,
        }
    }

    #[test]
    fn test_in_stock() {
        let mut book = sample();
        assert!(book.in_stock());

        book.total_count = 0;
        assert!(!book.in_stock());

        book.total_count = -1;
        assert!(!book.in_stock());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["priceCents"], 1000);
        assert_eq!(json["category"], "TECHNOLOGY");
    }
}
