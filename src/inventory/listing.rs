//! Flattened device listings
//!
//! A borrowed, ordered view over the store used by list and sort-by-price.

use std::fmt;

use crate::device::Device;

/// Ordered, read-only projection of devices
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    devices: Vec<&'a Device>,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(devices: Vec<&'a Device>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Device> + '_ {
        self.devices.iter().copied()
    }

    /// Device names in listing order
    pub fn names(&self) -> Vec<&'a str> {
        self.devices.iter().map(|d| d.name()).collect()
    }

    /// Device prices in listing order
    pub fn prices(&self) -> Vec<f64> {
        self.devices.iter().map(|d| d.price()).collect()
    }
}

/// One line for a device, without the index prefix
pub fn describe(device: &Device) -> String {
    format!(
        "Category: {}, Name: {}, Price: {:.2}$, Quantity: {}",
        device.category(),
        device.name(),
        device.price(),
        device.quantity()
    )
}

impl fmt::Display for Listing<'_> {
    /// 1-indexed, one device per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, device) in self.devices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, describe(device))?;
        }
        Ok(())
    }
}
