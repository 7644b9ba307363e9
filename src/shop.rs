//! Shop Module
//!
//! Owns the inventory for one run and routes parsed commands to it.
//!
//! ## Responsibilities
//! - Seed the inventory on startup (starter devices, empty, or a JSON file)
//! - Execute commands against the inventory
//! - Export the report to the configured path

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::config::{Config, Seed};
use crate::device::Device;
use crate::error::{InventoryError, Result};
use crate::inventory::Inventory;
use crate::protocol::{Command, Reply};
use crate::report::ReportSummary;

/// The shop: configuration plus the live inventory
pub struct Shop {
    /// Shop configuration
    config: Config,

    /// The device store
    inventory: Inventory,
}

impl Shop {
    /// Open a shop and seed its inventory per `config.seed`
    pub fn open(config: Config) -> Result<Self> {
        if config.report_path.as_os_str().is_empty() {
            return Err(InventoryError::Config("report path is empty".to_string()));
        }

        let mut inventory = Inventory::with_policy(config.name_policy);

        let seed_devices = match &config.seed {
            Seed::Defaults => starter_devices(),
            Seed::Empty => Vec::new(),
            Seed::File(path) => load_seed_file(path)?,
        };

        let total = seed_devices.len();
        let mut skipped = 0;
        for device in seed_devices {
            if let Err(e) = inventory.add(device) {
                tracing::warn!("Skipping seed device: {}", e);
                skipped += 1;
            }
        }

        if total > 0 {
            tracing::info!("Seeded {} devices ({} skipped)", total - skipped, skipped);
        }

        Ok(Self { config, inventory })
    }

    /// Open with an empty inventory and otherwise default config
    pub fn empty() -> Self {
        Self {
            config: Config::builder().seed(Seed::Empty).build(),
            inventory: Inventory::new(),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the inventory
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        tracing::trace!("Executing {:?}", command.command_type());

        match command {
            Command::Add { device } => {
                self.inventory.add(device.clone())?;
                Ok(Reply::Added(device))
            }
            Command::Remove { name } => self.inventory.remove(&name).map(Reply::Removed),
            Command::Update { name, update } => self
                .inventory
                .update_details(&name, update)
                .map(|d| Reply::Updated(d.clone())),
            Command::List => Ok(Reply::Listing(self.inventory.list().to_string())),
            Command::FindCheapest => Ok(Reply::Cheapest(self.inventory.find_cheapest().cloned())),
            Command::SortByPrice => Ok(Reply::Sorted(self.inventory.sort_by_price().to_string())),
            Command::TotalValue => Ok(Reply::TotalValue(self.inventory.total_value())),
            Command::Restock {
                name,
                delta,
                action,
            } => {
                let quantity = self.inventory.restock(&name, delta, action)?;
                Ok(Reply::Restocked {
                    name,
                    quantity,
                    action,
                })
            }
            Command::Export => {
                let summary = self.export()?;
                Ok(Reply::Exported {
                    path: self.config.report_path.clone(),
                    summary,
                })
            }
            Command::Exit => Ok(Reply::Exit),
        }
    }

    /// Write the report to `config.report_path`
    pub fn export(&self) -> Result<ReportSummary> {
        let path = &self.config.report_path;

        let result = File::create(path)
            .map_err(InventoryError::from)
            .and_then(|file| self.inventory.export_report(&mut BufWriter::new(file)));

        match &result {
            Ok(summary) => tracing::info!(
                "Exported {} devices to {}",
                summary.device_count,
                path.display()
            ),
            Err(e) => tracing::error!("Export to {} failed: {}", path.display(), e),
        }

        result
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// One device per category
pub fn starter_devices() -> Vec<Device> {
    vec![
        Device::new("TV", "LG Oled", 1200.0, 10),
        Device::new("Smart Phone", "Iphone 15", 800.0, 5),
        Device::new("Headphones", "Sony WH-CH520", 200.0, 20),
        Device::new("Laptop", "Dell G3 15", 1500.0, 15),
        Device::new("Smart Watch", "Huawei Watch GT", 300.0, 10),
    ]
}

/// Read a JSON array of devices
fn load_seed_file(path: &Path) -> Result<Vec<Device>> {
    let text = fs::read_to_string(path)?;
    let devices: Vec<Device> = serde_json::from_str(&text)?;
    tracing::debug!("Read {} seed devices from {}", devices.len(), path.display());
    Ok(devices)
}
