//! Response definitions
//!
//! `Reply` is what the shop hands back on success; `Response` is what the
//! session renders, success or not.

use std::fmt;
use std::path::PathBuf;

use crate::device::Device;
use crate::error::InventoryError;
use crate::inventory::{describe, StockAction};
use crate::report::ReportSummary;

/// Shown when a query has no devices to report on
pub const NO_DEVICES: &str = "No devices found in the inventory.";

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Rejected,
    Invalid,
    Error,
}

/// A successful command result
#[derive(Debug, Clone)]
pub enum Reply {
    Added(Device),
    Removed(Device),
    Updated(Device),
    Listing(String),
    Sorted(String),
    Cheapest(Option<Device>),
    TotalValue(f64),
    Restocked {
        name: String,
        quantity: u32,
        action: StockAction,
    },
    Exported {
        path: PathBuf,
        summary: ReportSummary,
    },
    Exit,
}

impl Reply {
    /// Human-readable rendering
    pub fn message(&self) -> String {
        match self {
            Reply::Added(d) => format!(
                "{}, {}, {:.2}$, {} amount added...",
                d.category(),
                d.name(),
                d.price(),
                d.quantity()
            ),
            Reply::Removed(d) => format!("Device {} removed.", d.name()),
            Reply::Updated(d) => format!(
                "{} details updated: Price - {:.2}$, Quantity - {}",
                d.name(),
                d.price(),
                d.quantity()
            ),
            Reply::Listing(rows) => join_block("Device List:", rows),
            Reply::Sorted(rows) => join_block("Devices sorted by price:", rows),
            Reply::Cheapest(Some(d)) => format!("The cheapest device is:\n{}", describe(d)),
            Reply::Cheapest(None) => NO_DEVICES.to_string(),
            Reply::TotalValue(v) => format!("The total inventory value is: {:.2}$", v),
            Reply::Restocked {
                name,
                quantity,
                action: StockAction::Add,
            } => format!("{} restocked. New quantity: {}", name, quantity),
            Reply::Restocked {
                name,
                quantity,
                action: StockAction::Remove,
            } => format!("{} stock reduced. New quantity: {}", name, quantity),
            Reply::Exported { path, .. } => {
                format!("Inventory report exported to {}", path.display())
            }
            Reply::Exit => "Exiting...".to_string(),
        }
    }
}

fn join_block(title: &str, rows: &str) -> String {
    if rows.is_empty() {
        title.to_string()
    } else {
        format!("{}\n{}", title, rows)
    }
}

/// A rendered outcome for the session
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Text shown to the user
    pub message: String,
}

impl Response {
    /// Create an OK response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
        }
    }

    /// Create a NOT_FOUND response
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: Status::NotFound,
            message: message.into(),
        }
    }

    /// Create a REJECTED response
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: Status::Rejected,
            message: message.into(),
        }
    }

    /// Create an INVALID response
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: Status::Invalid,
            message: message.into(),
        }
    }

    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Reply> for Response {
    fn from(reply: Reply) -> Self {
        Response::ok(reply.message())
    }
}

impl From<&InventoryError> for Response {
    fn from(err: &InventoryError) -> Self {
        match err {
            InventoryError::NotFound(_) => Response::not_found(err.to_string()),
            InventoryError::InsufficientStock { .. } => {
                Response::rejected("Error: Attempt to remove more stock than available.")
            }
            InventoryError::CategoryRejected(_) => Response::rejected(format!(
                "{} Please choose from the allowed categories.\nAllowed categories: [{}]",
                err,
                crate::device::Category::allowed_list()
            )),
            e if e.is_rejection() => Response::rejected(e.to_string()),
            InventoryError::InvalidInput(msg) => Response::invalid(msg.clone()),
            InventoryError::Io(e) => Response::error(format!(
                "An error occurred while writing to the file: {}",
                e
            )),
            e => Response::error(e.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
