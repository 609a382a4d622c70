//! # Book Transfer Shape
//!
//! The DTO exchanged at the service boundary.
//!
//! The only difference from the persisted [`Book`] entity is that `id` is
//! optional on input: an update payload may omit it, which means "no change
//! requested" as opposed to an explicit value.

use serde::{Deserialize, Serialize};

use libris_core::{Book, Category};

/// Transfer shape for a book at the service boundary.
///
/// ## Why a DTO?
/// - Decouples the persisted entity from the API contract
/// - Lets update payloads omit the identifier
/// - Handles serde rename to camelCase for JSON consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    /// Identifier; optional so an update payload can leave it out.
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub category: Category,
    pub total_count: i64,
}

impl BookDto {
    /// Converts into the persisted entity, forcing the identifier.
    ///
    /// Every other field carries over unchanged. Operations that target a
    /// specific record (update) pass the path-supplied id here, so whatever
    /// the payload held for `id` never reaches storage.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price_cents: self.price_cents,
            category: self.category,
            total_count: self.total_count,
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        BookDto {
            id: Some(book.id),
            title: book.title,
            author: book.author,
            price_cents: book.price_cents,
            category: book.category,
            total_count: book.total_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
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
    fn test_conversions_preserve_every_field() {
        let book = sample_book();
        let dto = BookDto::from(book.clone());

        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.title, book.title);
        assert_eq!(dto.author, book.author);
        assert_eq!(dto.price_cents, book.price_cents);
        assert_eq!(dto.category, book.category);
        assert_eq!(dto.total_count, book.total_count);

        assert_eq!(dto.into_book(1), book);
    }

    #[test]
    fn test_into_book_forces_id() {
        let dto = BookDto::from(sample_book());
        let book = dto.into_book(99);
        assert_eq!(book.id, 99);
    }

    #[test]
    fn test_payload_may_omit_id() {
        let dto: BookDto = serde_json::from_str(
            r#"{
                "title": "Go Deep",
                "author": "Ada",
                "priceCents": 1000,
                "category": "TECHNOLOGY",
                "totalCount": 2
            }"#,
        )
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.category, Category::Technology);
    }
}
