//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Key Operations
//! - Lookup by id and full listing
//! - Plain insert (duplicate ids rejected by the PRIMARY KEY)
//! - Single-statement upsert for full-record replacement
//! - Combined category/keyword search
//!
//! ## Keyword Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 How Category/Keyword Search Works                   │
//! │                                                                     │
//! │  Caller supplies: keyword "ada" (already lower-cased), code 4      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Row matches when category = 4 AND the keyword appears as a        │
//! │  substring in any of:                                              │
//! │                                                                     │
//! │    title               (case-sensitive, as stored)                 │
//! │    CAST(id AS TEXT)    (decimal form of the id)                    │
//! │    LOWER(author)       (case-insensitive via the lowered column)   │
//! │                                                                     │
//! │  An empty keyword matches every row in the category.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The connection pool sets `case_sensitive_like`, so the title and id
//! branches match exactly as given. Wildcard characters in the keyword are
//! passed through to LIKE unescaped.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use libris_core::Book;

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let book = repo.find_by_id(42).await?;
/// let hits = repo.find_by_category_and_keyword("ada", 4).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Gets a book by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, price_cents, category, total_count
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Lists every book.
    ///
    /// No ordering is guaranteed; callers must not rely on row order.
    pub async fn find_all(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, price_cents, category, total_count FROM books",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Inserts a new book.
    ///
    /// The id must not be registered yet: the PRIMARY KEY constraint makes
    /// this safe against concurrent registrations of the same id, so a
    /// check-then-insert sequence cannot let two writers both succeed.
    ///
    /// ## Returns
    /// * `Ok(Book)` - Inserted book
    /// * `Err(DbError::UniqueViolation)` - id already registered
    pub async fn insert(&self, book: &Book) -> DbResult<Book> {
        debug!(id = book.id, "Inserting book");

        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, price_cents, category, total_count)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.price_cents)
        .bind(book.category)
        .bind(book.total_count)
        .execute(&self.pool)
        .await?;

        Ok(book.clone())
    }

    /// Saves a book: insert if the id is absent, else replace every column.
    ///
    /// A single upsert statement, so the replacement is atomic and usable
    /// both for pure inserts and for full-record updates.
    pub async fn save(&self, book: &Book) -> DbResult<Book> {
        debug!(id = book.id, "Saving book");

        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, price_cents, category, total_count)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                price_cents = excluded.price_cents,
                category = excluded.category,
                total_count = excluded.total_count
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.price_cents)
        .bind(book.category)
        .bind(book.total_count)
        .execute(&self.pool)
        .await?;

        Ok(book.clone())
    }

    /// Finds books in a category whose title, id-as-text, or lowered author
    /// contains the keyword as a substring.
    ///
    /// ## Arguments
    /// * `keyword` - Search term, expected already lower-cased by the caller.
    ///   Empty matches everything in the category.
    /// * `category_code` - Stable integer code to filter on (exact equality).
    pub async fn find_by_category_and_keyword(
        &self,
        keyword: &str,
        category_code: i32,
    ) -> DbResult<Vec<Book>> {
        debug!(keyword = %keyword, category_code, "Searching books");

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, price_cents, category, total_count
            FROM books
            WHERE (title LIKE '%' || ?1 || '%'
                OR CAST(id AS TEXT) LIKE '%' || ?1 || '%'
                OR LOWER(author) LIKE '%' || ?1 || '%')
            AND category = ?2
            "#,
        )
        .bind(keyword)
        .bind(category_code)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Search returned books");
        Ok(books)
    }

    /// Counts registered books (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use libris_core::Category;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn book(id: i64, title: &str, author: &str, category: Category) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            price_cents: 1000,
            category,
            total_count: 2,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let db = test_db().await;
        let repo = db.books();

        let inserted = repo
            .insert(&book(1, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();
        let found = repo.find_by_id(1).await.unwrap().unwrap();

        assert_eq!(found, inserted);
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_unique_violation() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();
        let err = repo
            .insert(&book(1, "Other", "Someone", Category::Drama))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_save_inserts_then_replaces() {
        let db = test_db().await;
        let repo = db.books();

        repo.save(&book(1, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();

        let mut replacement = book(1, "Go Deeper", "Ada Lovelace", Category::Technology);
        replacement.total_count = 9;
        repo.save(&replacement).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found, replacement);
    }

    #[tokio::test]
    async fn test_find_all_returns_every_row() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "One", "A", Category::Fiction))
            .await
            .unwrap();
        repo.insert(&book(2, "Two", "B", Category::Drama))
            .await
            .unwrap();

        let mut ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_filters_by_category_code() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();

        let hits = repo
            .find_by_category_and_keyword("ada", Category::Technology.code())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let misses = repo
            .find_by_category_and_keyword("ada", Category::Fiction.code())
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_author_case_insensitively() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "Go Deep", "ADA LOVELACE", Category::Technology))
            .await
            .unwrap();

        // Caller lower-cases the keyword; the lowered author column matches.
        let hits = repo
            .find_by_category_and_keyword("lovelace", Category::Technology.code())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_search_title_match_is_case_sensitive() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();

        // "deep" does not appear in "Go Deep" as given, and "Ada" lowers to
        // "ada" which does not contain "deep" either.
        let misses = repo
            .find_by_category_and_keyword("deep", Category::Technology.code())
            .await
            .unwrap();
        assert!(misses.is_empty());

        let hits = repo
            .find_by_category_and_keyword("Deep", Category::Technology.code())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_search_matches_id_as_text() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1234, "Go Deep", "Ada", Category::Technology))
            .await
            .unwrap();

        let hits = repo
            .find_by_category_and_keyword("23", Category::Technology.code())
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1234);
    }

    #[tokio::test]
    async fn test_search_empty_keyword_matches_whole_category() {
        let db = test_db().await;
        let repo = db.books();

        repo.insert(&book(1, "One", "A", Category::Poetry))
            .await
            .unwrap();
        repo.insert(&book(2, "Two", "B", Category::Poetry))
            .await
            .unwrap();
        repo.insert(&book(3, "Three", "C", Category::Drama))
            .await
            .unwrap();

        let hits = repo
            .find_by_category_and_keyword("", Category::Poetry.code())
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }
}
