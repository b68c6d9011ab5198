//! Expense categories
//!
//! Categories are a fixed, read-only lookup table. Expenses refer to them by
//! their short string id.

use serde::Serialize;
use std::fmt;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable identifier stored on expenses
    pub id: &'static str,

    /// Display name
    pub name: &'static str,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// All known categories, in display order
pub const CATEGORIES: &[Category] = &[
    Category { id: "savings", name: "Savings" },
    Category { id: "food", name: "Food" },
    Category { id: "home", name: "Home" },
    Category { id: "misc", name: "Miscellaneous" },
    Category { id: "leisure", name: "Leisure" },
    Category { id: "health", name: "Health" },
    Category { id: "subscriptions", name: "Subscriptions" },
];

/// Label used for ids that are not in the table
pub const UNKNOWN_CATEGORY: &str = "Uncategorized";

/// Look up a category by id
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Look up a category by display name (case-insensitive)
pub fn find_category_by_name(name: &str) -> Option<&'static Category> {
    let name = name.trim();
    CATEGORIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Resolve user input that may be either an id or a display name
pub fn resolve_category(identifier: &str) -> Option<&'static Category> {
    find_category(identifier.trim()).or_else(|| find_category_by_name(identifier))
}

/// Display name for a category id, falling back to [`UNKNOWN_CATEGORY`]
pub fn category_name(id: &str) -> &'static str {
    find_category(id).map(|c| c.name).unwrap_or(UNKNOWN_CATEGORY)
}

/// Position of a category in the table, used for stable ordering
pub fn category_position(id: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.id == id)
}
