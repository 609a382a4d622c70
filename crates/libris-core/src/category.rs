//! # Category Type
//!
//! The closed set of book categories and their stable integer codes.
//!
//! ## Code Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Category Codes                                 │
//! │                                                                     │
//! │   LITERATURE = 0      THRILLER   = 3      POETRY = 6               │
//! │   FICTION    = 1      TECHNOLOGY = 4      OTHERS = 7               │
//! │   ACTION     = 2      DRAMA      = 5                               │
//! │                                                                     │
//! │   The code is what goes into the `books.category` column and the   │
//! │   search filter. It is a storage contract: persisted rows are only │
//! │   interpretable as long as this table never changes.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both directions of the mapping are compile-time constants. There is no
//! runtime lookup table to initialize and therefore nothing mutable to
//! guard; `from_code` is a pure total function over i32.

use serde::{Deserialize, Serialize};

/// A book category.
///
/// The discriminants are the persisted codes. New categories may only be
/// appended with fresh codes; existing codes must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[repr(i32)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Literature = 0,
    Fiction = 1,
    Action = 2,
    Thriller = 3,
    Technology = 4,
    Drama = 5,
    Poetry = 6,
    Others = 7,
}

impl Category {
    /// Every category, in code order.
    pub const ALL: [Category; 8] = [
        Category::Literature,
        Category::Fiction,
        Category::Action,
        Category::Thriller,
        Category::Technology,
        Category::Drama,
        Category::Poetry,
        Category::Others,
    ];

    /// Returns the stable integer code used in storage and search filters.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolves a category from its persisted code.
    ///
    /// ## Returns
    /// * `Some(Category)` - code is one of 0..=7
    /// * `None` - unrecognized code (never panics)
    pub const fn from_code(code: i32) -> Option<Category> {
        match code {
            0 => Some(Category::Literature),
            1 => Some(Category::Fiction),
            2 => Some(Category::Action),
            3 => Some(Category::Thriller),
            4 => Some(Category::Technology),
            5 => Some(Category::Drama),
            6 => Some(Category::Poetry),
            7 => Some(Category::Others),
            _ => None,
        }
    }

    /// Returns the symbolic name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Literature => "LITERATURE",
            Category::Fiction => "FICTION",
            Category::Action => "ACTION",
            Category::Thriller => "THRILLER",
            Category::Technology => "TECHNOLOGY",
            Category::Drama => "DRAMA",
            Category::Poetry => "POETRY",
            Category::Others => "OTHERS",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        // The persisted contract. If this test fails, stored rows and every
        // external consumer of the code are broken.
        assert_eq!(Category::Literature.code(), 0);
        assert_eq!(Category::Fiction.code(), 1);
        assert_eq!(Category::Action.code(), 2);
        assert_eq!(Category::Thriller.code(), 3);
        assert_eq!(Category::Technology.code(), 4);
        assert_eq!(Category::Drama.code(), 5);
        assert_eq!(Category::Poetry.code(), 6);
        assert_eq!(Category::Others.code(), 7);
    }

    #[test]
    fn test_from_code_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(Category::from_code(-1), None);
        assert_eq!(Category::from_code(8), None);
        assert_eq!(Category::from_code(i32::MAX), None);
    }

    #[test]
    fn test_serializes_by_name() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, r#""TECHNOLOGY""#);

        let parsed: Category = serde_json::from_str(r#""POETRY""#).unwrap();
        assert_eq!(parsed, Category::Poetry);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Category::Others.to_string(), "OTHERS");
    }
}
