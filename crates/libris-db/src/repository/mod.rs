//! # Repository Module
//!
//! Database repository implementation for Libris.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                               │
//! │                                                                     │
//! │  InventoryService                                                  │
//! │       │                                                             │
//! │       │  db.books().find_by_id(42)                                  │
//! │       ▼                                                             │
//! │  BookRepository                                                    │
//! │  ├── find_by_id(&self, id)                                          │
//! │  ├── find_all(&self)                                                │
//! │  ├── insert(&self, book)      plain insert, duplicate id rejected   │
//! │  ├── save(&self, book)        single-statement upsert               │
//! │  └── find_by_category_and_keyword(&self, keyword, code)             │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod book;
