//! Input codec
//!
//! Parses raw console lines into typed command arguments. Everything that
//! reaches the inventory has already been through one of these.
//!
//! ## Accepted Forms
//! - choice:   `0`..`9`
//! - price:    any text; everything but digits and `.` is dropped (`1000$`)
//! - quantity: non-negative integer
//! - action:   `Add` / `Remove`, any case
//! - blank price/quantity on update means "keep current"

use crate::device::Category;
use crate::error::{InventoryError, Result};
use crate::inventory::StockAction;

use super::CommandType;

const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 0 and 9.";
const INVALID_PRICE: &str =
    "Invalid price format. Please enter a number followed by currency symbol (e.g., 1000$)";
const INVALID_QUANTITY: &str = "Invalid quantity format. Please enter a numeric quantity.";
const INVALID_ACTION: &str = "Invalid action. Please enter 'Add' or 'Remove'.";

/// Parse a menu choice
pub fn parse_menu_choice(line: &str) -> Result<CommandType> {
    line.trim()
        .parse::<u8>()
        .ok()
        .and_then(CommandType::from_choice)
        .ok_or_else(|| InventoryError::InvalidInput(INVALID_CHOICE.to_string()))
}

/// Parse a category name (exact literal after trimming)
pub fn parse_category(line: &str) -> Result<Category> {
    line.trim().parse()
}

/// Parse a price, tolerating a currency symbol
pub fn parse_price(line: &str) -> Result<f64> {
    let digits: String = line
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits
        .parse::<f64>()
        .map_err(|_| InventoryError::InvalidInput(INVALID_PRICE.to_string()))
}

/// Parse an optional price; blank keeps the current value
pub fn parse_optional_price(line: &str) -> Result<Option<f64>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    parse_price(line).map(Some)
}

/// Parse a non-negative quantity
pub fn parse_quantity(line: &str) -> Result<u32> {
    line.trim()
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidInput(INVALID_QUANTITY.to_string()))
}

/// Parse an optional quantity; blank keeps the current value
pub fn parse_optional_quantity(line: &str) -> Result<Option<u32>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    parse_quantity(line).map(Some)
}

/// Parse `Add` / `Remove`
pub fn parse_stock_action(line: &str) -> Result<StockAction> {
    let action = line.trim();
    if action.eq_ignore_ascii_case("add") {
        Ok(StockAction::Add)
    } else if action.eq_ignore_ascii_case("remove") {
        Ok(StockAction::Remove)
    } else {
        Err(InventoryError::InvalidInput(INVALID_ACTION.to_string()))
    }
}
