//! # Stockroom
//!
//! An in-memory electronics inventory manager with:
//! - A fixed category whitelist (Headphones, TV, Smart Phone, Laptop, Smart Watch)
//! - Devices grouped by category, in insertion order
//! - Case-insensitive name lookups, restock with stock checks
//! - Plain-text report export
//! - An interactive numbered menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Console Session                           │
//! │           (prompts, input parsing, rendering)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Shop                                  │
//! │              (seeding, command routing)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Inventory  │─────────▶│   Report    │
//!   │  (groups)   │          │  (export)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod device;
pub mod inventory;
pub mod report;
pub mod protocol;
pub mod console;
pub mod shop;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use device::{Category, Device};
pub use inventory::Inventory;
pub use shop::Shop;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
