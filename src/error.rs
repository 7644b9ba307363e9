//! Error types for Stockroom
//!
//! Provides a unified error type for all operations. Every variant is
//! recoverable: the inventory is left in its previous valid state.

use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for Stockroom operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Category '{0}' is not allowed.")]
    CategoryRejected(String),

    #[error("A device with name '{0}' already exists.")]
    DuplicateName(String),

    #[error("Attempt to remove more stock than available for {name} (requested {requested}, available {available}).")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Quantity overflow while restocking {name}.")]
    QuantityOverflow { name: String },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Device {0} not found.")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Seed / Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InventoryError {
    /// True for errors that reject an otherwise well-formed request
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            InventoryError::CategoryRejected(_)
                | InventoryError::DuplicateName(_)
                | InventoryError::InsufficientStock { .. }
                | InventoryError::QuantityOverflow { .. }
        )
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Seed(err.to_string())
    }
}
