//! Device Module
//!
//! The device record and the closed set of categories it can be filed under.
//!
//! ## Data Model
//! A device is plain tagged data: category, name, price, quantity. There is
//! no per-category behavior, so the category is a field rather than a type.
//!
//! The category is kept as the raw string the caller supplied. The store
//! parses it into a [`Category`] on add and rejects anything outside the
//! whitelist.

mod record;

pub use record::Device;

use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;

/// Allowed device categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Headphones,
    Tv,
    SmartPhone,
    Laptop,
    SmartWatch,
}

impl Category {
    /// Every allowed category, in menu display order
    pub const ALL: [Category; 5] = [
        Category::Headphones,
        Category::Tv,
        Category::SmartPhone,
        Category::Laptop,
        Category::SmartWatch,
    ];

    /// The exact literal accepted for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Headphones => "Headphones",
            Category::Tv => "TV",
            Category::SmartPhone => "Smart Phone",
            Category::Laptop => "Laptop",
            Category::SmartWatch => "Smart Watch",
        }
    }

    /// Comma separated list of allowed literals, for prompts and diagnostics
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    /// Exact, case-sensitive match against the whitelist
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InventoryError::CategoryRejected(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
