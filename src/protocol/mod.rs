//! Protocol Module
//!
//! The menu-level request/response vocabulary between the interactive
//! session and the shop.
//!
//! ## Menu
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ Choice │ Command                      │
//! ├────────┼──────────────────────────────┤
//! │   1    │ Add a new device             │
//! │   2    │ Remove a device              │
//! │   3    │ Update device details        │
//! │   4    │ List all devices             │
//! │   5    │ Find the cheapest device     │
//! │   6    │ Sort devices by price        │
//! │   7    │ Calculate total value        │
//! │   8    │ Restock a device             │
//! │   9    │ Export inventory report      │
//! │   0    │ Exit                         │
//! └────────┴──────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - OK:        command applied
//! - NOT_FOUND: no device with that name
//! - REJECTED:  whitelist, duplicate name, or stock check refused it
//! - INVALID:   input could not be parsed
//! - ERROR:     I/O or other failure

mod codec;
mod command;
mod response;

pub use codec::{
    parse_category, parse_menu_choice, parse_optional_price, parse_optional_quantity,
    parse_price, parse_quantity, parse_stock_action,
};
pub use command::{Command, CommandType};
pub use response::{Reply, Response, Status, NO_DEVICES};
