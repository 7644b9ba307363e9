//! Report Module
//!
//! Plain-text inventory report export.
//!
//! ## Report Format
//! ```text
//! Electronics Shop Inventory Report
//! Generated on: 2026-10-18
//! -------------------------------------------------
//! | No. | Category | Name | Price | Quantity |
//! -------------------------------------------------
//! | 1 | TV | LG Oled | $1200.00 | 10 |
//! | 2 | Smart Phone | Iphone 15 | $800.00 | 5 |
//! Summary:
//! - Total Number of Devices: 2
//! - Total Inventory Value: $16,000.00
//! End of Report
//! ```
//!
//! Rows are numbered in storage order (category-then-insertion). Row prices
//! have no thousands separators; the summary value does.

mod summary;
mod writer;

pub use summary::ReportSummary;
pub use writer::{format_currency, Report};

/// First line of every report
pub const REPORT_TITLE: &str = "Electronics Shop Inventory Report";

/// Rule above and below the column header row
pub const REPORT_RULE: &str = "-------------------------------------------------";

/// Column header row
pub const REPORT_COLUMNS: &str = "| No. | Category | Name | Price | Quantity |";

/// Summary line prefixes
pub const DEVICE_COUNT_PREFIX: &str = "- Total Number of Devices: ";
pub const TOTAL_VALUE_PREFIX: &str = "- Total Inventory Value: ";

/// Last line of every report
pub const REPORT_FOOTER: &str = "End of Report";
