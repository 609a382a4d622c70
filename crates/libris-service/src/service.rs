//! # Inventory Service
//!
//! Business rules around the book lifecycle.
//!
//! ## Registration vs. Restock vs. Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Book Lifecycle                                 │
//! │                                                                     │
//! │  register_book({id: 1, ...})                                       │
//! │       │                                                             │
//! │       ├── id already registered? → DuplicateResource               │
//! │       └── else insert verbatim (including the supplied count)      │
//! │                                                                     │
//! │  restock(1, +3)                                                    │
//! │       │                                                             │
//! │       ├── id not registered? → BookNotFound                        │
//! │       └── else total_count += 3, save                              │
//! │                                                                     │
//! │  update_book(1, {id: 2, ...}) → IdMismatch (id is immutable)       │
//! │  update_book(1, {id: 1, ...})                                      │
//! │  update_book(1, {..no id..})  → full replace under id 1            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no state of its own beyond the database handle; every
//! read reflects the store's committed state at the time of the call.

use tracing::{debug, info, warn};

use libris_core::validation::{validate_book_id, validate_price_cents};
use libris_core::Category;
use libris_db::{Database, DbError};

use crate::dto::BookDto;
use crate::error::{ServiceError, ServiceResult};

/// The inventory service.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::new("./libris.db")).await?;
/// let inventory = InventoryService::new(db);
///
/// inventory.restock(42, 10).await?;
/// let in_stock = inventory.count_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryService {
    db: Database,
}

impl InventoryService {
    /// Creates a new InventoryService on top of a database handle.
    pub fn new(db: Database) -> Self {
        InventoryService { db }
    }

    /// Registers a book under a new identifier.
    ///
    /// The record is saved verbatim, including whatever `total_count` the
    /// caller supplied.
    ///
    /// ## Errors
    /// * `Validation` - `dto.id` missing, or negative price
    /// * `DuplicateResource` - the id is already registered
    pub async fn register_book(&self, dto: BookDto) -> ServiceResult<()> {
        let id = validate_book_id(dto.id)?;
        validate_price_cents(dto.price_cents)?;

        if self.db.books().find_by_id(id).await?.is_some() {
            return Err(ServiceError::DuplicateResource { id });
        }
        debug!(id, "No duplicate found");

        let book = dto.into_book(id);
        match self.db.books().insert(&book).await {
            Ok(_) => {
                info!(id, "Book registered");
                Ok(())
            }
            // A concurrent registration can slip in between the check and
            // the insert; the primary key turns that race into a conflict.
            Err(DbError::UniqueViolation { .. }) => Err(ServiceError::DuplicateResource { id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Adds stock to an already-registered book.
    ///
    /// `quantity_to_add` may be any integer; the resulting count is not
    /// clamped at zero, a negative result only logs a warning.
    ///
    /// ## Errors
    /// * `BookNotFound` - the id is not registered
    pub async fn restock(&self, id: i64, quantity_to_add: i64) -> ServiceResult<()> {
        let mut book = self
            .db
            .books()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::BookNotFound { id })?;

        book.total_count += quantity_to_add;
        if book.total_count < 0 {
            warn!(id, total_count = book.total_count, "Stock level is negative");
        }

        self.db.books().save(&book).await?;
        info!(
            id,
            quantity_to_add,
            total_count = book.total_count,
            "Stock adjusted"
        );
        Ok(())
    }

    /// Gets a book by its id.
    ///
    /// ## Errors
    /// * `BookNotFound` - the id is not registered
    pub async fn get_book_by_id(&self, id: i64) -> ServiceResult<BookDto> {
        let book = self
            .db
            .books()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::BookNotFound { id })?;

        Ok(BookDto::from(book))
    }

    /// Lists every registered book, in store order.
    pub async fn list_books(&self) -> ServiceResult<Vec<BookDto>> {
        let books = self.db.books().find_all().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    /// Returns the stock level for an id, or `0` when the id is unknown.
    ///
    /// Deliberately lenient: absence is not an error here, unlike
    /// [`get_book_by_id`](Self::get_book_by_id).
    pub async fn count_by_id(&self, id: i64) -> ServiceResult<i64> {
        let count = self
            .db
            .books()
            .find_by_id(id)
            .await?
            .map(|book| book.total_count)
            .unwrap_or(0);

        Ok(count)
    }

    /// Replaces the record under `id` with the payload.
    ///
    /// The identifier is immutable: a payload id that differs from `id` is
    /// rejected, and omitting the payload id is equivalent to supplying the
    /// matching one. The save is an upsert, so an unknown `id` is created
    /// rather than rejected.
    ///
    /// ## Errors
    /// * `IdMismatch` - `dto.id` present and different from `id`
    /// * `Validation` - negative price
    pub async fn update_book(&self, id: i64, dto: BookDto) -> ServiceResult<()> {
        if let Some(dto_id) = dto.id {
            if dto_id != id {
                return Err(ServiceError::IdMismatch);
            }
        }
        validate_price_cents(dto.price_cents)?;

        // The target id always wins, whatever the payload held.
        let book = dto.into_book(id);
        self.db.books().save(&book).await?;
        info!(id, "Book saved");
        Ok(())
    }

    /// Finds books in a category whose title, id-as-text, or author contains
    /// the keyword.
    ///
    /// The keyword is lower-cased here; the author match is
    /// case-insensitive, title and id-as-text match as given. An empty
    /// result is not an error.
    pub async fn search_by_category_and_keyword(
        &self,
        keyword: &str,
        category: Category,
    ) -> ServiceResult<Vec<BookDto>> {
        let lowered = keyword.to_lowercase();
        debug!(keyword = %lowered, category = %category, "Searching books");

        let books = self
            .db
            .books()
            .find_by_category_and_keyword(&lowered, category.code())
            .await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
