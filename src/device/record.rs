//! Device record
//!
//! Four accessors, four mutators, no validation.

use serde::{Deserialize, Serialize};

/// A single stocked device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    category: String,
    name: String,
    price: f64,
    quantity: u32,
}

impl Device {
    /// Create a device with all four fields
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Stock value of this device (price * quantity)
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Case-insensitive name comparison used by every store lookup
    ///
    /// Folds one character at a time, so context rules like the Greek final
    /// sigma never apply and nothing is allocated.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}
