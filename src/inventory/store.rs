//! Inventory store
//!
//! Category-partitioned device storage with case-insensitive name lookups.

use std::io::Write;

use crate::config::NamePolicy;
use crate::device::{Category, Device};
use crate::error::{InventoryError, Result};
use crate::report::{Report, ReportSummary};

use super::{DetailsUpdate, Listing, StockAction};

/// Devices filed under one category, in insertion order
#[derive(Debug, Clone)]
struct CategoryGroup {
    category: Category,
    devices: Vec<Device>,
}

/// In-memory device inventory
///
/// ## Ordering
/// Iteration is category-then-insertion: groups appear in the order their
/// first device was accepted, devices within a group in the order added.
/// Groups are never removed, even when emptied.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Category groups, in creation order
    groups: Vec<CategoryGroup>,

    /// Uniqueness policy applied on add
    name_policy: NamePolicy,
}

impl Inventory {
    /// Create an empty inventory that rejects duplicate names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty inventory with an explicit name policy
    pub fn with_policy(name_policy: NamePolicy) -> Self {
        Self {
            groups: Vec::new(),
            name_policy,
        }
    }

    pub fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a device to its category group
    ///
    /// Rejected without any state change when the category is not one of the
    /// allowed literals, or when the name is taken under `NamePolicy::Unique`.
    pub fn add(&mut self, device: Device) -> Result<()> {
        let category = match device.category().parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                tracing::warn!(
                    "Rejected {}: category '{}' is not allowed",
                    device.name(),
                    device.category()
                );
                return Err(e);
            }
        };

        if self.name_policy == NamePolicy::Unique && self.exists(device.name()) {
            tracing::warn!("Rejected {}: name already in use", device.name());
            return Err(InventoryError::DuplicateName(device.name().to_string()));
        }

        tracing::debug!("Adding {} under {}", device.name(), category);

        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.devices.push(device),
            None => self.groups.push(CategoryGroup {
                category,
                devices: vec![device],
            }),
        }

        Ok(())
    }

    /// Remove the first device matching `name`
    pub fn remove(&mut self, name: &str) -> Result<Device> {
        for group in &mut self.groups {
            if let Some(pos) = group.devices.iter().position(|d| d.name_matches(name)) {
                let removed = group.devices.remove(pos);
                tracing::debug!("Removed {} from {}", removed.name(), group.category);
                return Ok(removed);
            }
        }

        Err(InventoryError::NotFound(name.to_string()))
    }

    /// Apply a new price and/or quantity to the first device matching `name`
    ///
    /// Returns the device as it stands after the update.
    pub fn update_details(&mut self, name: &str, update: DetailsUpdate) -> Result<&Device> {
        let device = self.find_mut(name)?;

        if let Some(price) = update.price.filter(|p| *p > 0.0) {
            device.set_price(price);
        }
        if let Some(quantity) = update.quantity {
            device.set_quantity(quantity);
        }

        tracing::debug!(
            "Updated {}: price={:.2} quantity={}",
            device.name(),
            device.price(),
            device.quantity()
        );

        Ok(&*device)
    }

    /// Adjust the stock of the first device matching `name`
    ///
    /// Returns the new quantity. Removing more than is on hand fails with
    /// `InsufficientStock` and leaves the quantity untouched.
    pub fn restock(&mut self, name: &str, delta: u32, action: StockAction) -> Result<u32> {
        let device = self.find_mut(name)?;
        let current = device.quantity();

        let updated = match action {
            StockAction::Add => current.checked_add(delta).ok_or_else(|| {
                InventoryError::QuantityOverflow {
                    name: device.name().to_string(),
                }
            })?,
            StockAction::Remove => {
                if delta > current {
                    tracing::warn!(
                        "Cannot remove {} of {}: only {} in stock",
                        delta,
                        device.name(),
                        current
                    );
                    return Err(InventoryError::InsufficientStock {
                        name: device.name().to_string(),
                        requested: delta,
                        available: current,
                    });
                }
                current - delta
            }
        };

        device.set_quantity(updated);
        tracing::debug!("Restocked {}: {} -> {}", device.name(), current, updated);

        Ok(updated)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Case-insensitive existence check
    pub fn exists(&self, name: &str) -> bool {
        self.devices().any(|d| d.name_matches(name))
    }

    /// First device matching `name`
    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices().find(|d| d.name_matches(name))
    }

    /// All devices in category-then-insertion order
    pub fn devices(&self) -> impl Iterator<Item = &Device> + '_ {
        self.groups.iter().flat_map(|g| g.devices.iter())
    }

    /// Categories in group creation order, including emptied ones
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|g| g.category).collect()
    }

    /// Devices filed under `category`, in insertion order
    pub fn devices_in(&self, category: Category) -> &[Device] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.devices.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of devices
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.devices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened listing in storage order
    pub fn list(&self) -> Listing<'_> {
        Listing::new(self.devices().collect())
    }

    /// Device with the strictly lowest price; ties keep the first seen
    pub fn find_cheapest(&self) -> Option<&Device> {
        self.devices().fold(None, |cheapest: Option<&Device>, device| match cheapest {
            Some(current) if device.price() >= current.price() => Some(current),
            _ => Some(device),
        })
    }

    /// Flattened listing sorted ascending by price
    ///
    /// Stable: equal prices keep storage order. Storage itself is untouched.
    pub fn sort_by_price(&self) -> Listing<'_> {
        let mut devices: Vec<&Device> = self.devices().collect();
        devices.sort_by(|a, b| a.price().total_cmp(&b.price()));
        Listing::new(devices)
    }

    /// Sum of price * quantity over every device
    pub fn total_value(&self) -> f64 {
        self.devices().map(Device::value).sum()
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Write the inventory report, dated today, to `sink`
    pub fn export_report<W: Write>(&self, sink: &mut W) -> Result<ReportSummary> {
        Report::new(self).write_to(sink)
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Device> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.devices.iter_mut())
            .find(|d| d.name_matches(name))
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))
    }
}
