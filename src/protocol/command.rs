//! Command definitions
//!
//! Represents fully parsed menu requests.

use crate::device::Device;
use crate::inventory::{DetailsUpdate, StockAction};

/// Command types, numbered by menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    Exit = 0,
    Add = 1,
    Remove = 2,
    Update = 3,
    List = 4,
    FindCheapest = 5,
    SortByPrice = 6,
    TotalValue = 7,
    Restock = 8,
    Export = 9,
}

impl CommandType {
    /// Menu entries in display order
    pub const MENU: [CommandType; 10] = [
        CommandType::Add,
        CommandType::Remove,
        CommandType::Update,
        CommandType::List,
        CommandType::FindCheapest,
        CommandType::SortByPrice,
        CommandType::TotalValue,
        CommandType::Restock,
        CommandType::Export,
        CommandType::Exit,
    ];

    /// Look up a menu choice
    pub fn from_choice(choice: u8) -> Option<Self> {
        Self::MENU.into_iter().find(|t| *t as u8 == choice)
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            CommandType::Add => "Add a new device",
            CommandType::Remove => "Remove a device",
            CommandType::Update => "Update device details",
            CommandType::List => "List all devices",
            CommandType::FindCheapest => "Find the cheapest device",
            CommandType::SortByPrice => "Sort devices by price",
            CommandType::TotalValue => "Calculate total inventory value",
            CommandType::Restock => "Restock a device",
            CommandType::Export => "Export inventory report",
            CommandType::Exit => "Exit",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a device to the inventory
    Add { device: Device },

    /// Remove a device by name
    Remove { name: String },

    /// Change price and/or quantity
    Update { name: String, update: DetailsUpdate },

    /// List every device in storage order
    List,

    /// Show the cheapest device
    FindCheapest,

    /// List every device ordered by price
    SortByPrice,

    /// Sum of price * quantity
    TotalValue,

    /// Add or remove stock
    Restock {
        name: String,
        delta: u32,
        action: StockAction,
    },

    /// Write the report to the configured path
    Export,

    /// End the session
    Exit,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Remove { .. } => CommandType::Remove,
            Command::Update { .. } => CommandType::Update,
            Command::List => CommandType::List,
            Command::FindCheapest => CommandType::FindCheapest,
            Command::SortByPrice => CommandType::SortByPrice,
            Command::TotalValue => CommandType::TotalValue,
            Command::Restock { .. } => CommandType::Restock,
            Command::Export => CommandType::Export,
            Command::Exit => CommandType::Exit,
        }
    }
}
