//! Inventory Module
//!
//! The device store and the request types it accepts.
//!
//! ## Responsibilities
//! - Enforce the category whitelist on add
//! - Keep devices grouped by category, in insertion order
//! - Case-insensitive name lookups (first match wins)
//! - Aggregates: cheapest device, total value, price ordering
//!
//! ## Data Structure Choice
//! An ordered `Vec` of category groups rather than a hash map:
//! - Category creation order is part of the observable listing order
//! - At most five groups, so a linear scan is as fast as hashing
//!
//! ```text
//! groups ─┬─ TV          ─ [LG Oled, Sony Bravia]
//!         ├─ Smart Phone ─ [Iphone 15]
//!         └─ Laptop      ─ [Dell G3 15]
//! ```

mod listing;
mod store;

pub use listing::{describe, Listing};
pub use store::Inventory;

/// Direction of a restock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Increase quantity unconditionally
    Add,

    /// Decrease quantity, only if enough stock is on hand
    Remove,
}

impl StockAction {
    /// Build from the legacy `isAdd` flag
    pub fn from_is_add(is_add: bool) -> Self {
        if is_add {
            StockAction::Add
        } else {
            StockAction::Remove
        }
    }
}

/// New price and quantity for `Inventory::update_details`
///
/// `None` keeps the current value. A supplied price that is not strictly
/// positive is also ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DetailsUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl DetailsUpdate {
    pub fn new(price: Option<f64>, quantity: Option<u32>) -> Self {
        Self { price, quantity }
    }

    /// Map sentinel values: price <= 0 and quantity < 0 mean "keep current"
    pub fn from_sentinels(price: f64, quantity: i64) -> Self {
        Self {
            price: (price > 0.0).then_some(price),
            quantity: u32::try_from(quantity).ok(),
        }
    }
}
