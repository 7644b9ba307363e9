//! Report summary
//!
//! The aggregate figures at the bottom of a report, and a parser that reads
//! them back out of exported text.

use crate::error::{InventoryError, Result};

use super::{DEVICE_COUNT_PREFIX, TOTAL_VALUE_PREFIX};

/// Device count and total value of an exported report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub device_count: usize,
    pub total_value: f64,
}

impl ReportSummary {
    /// Extract the summary block from report text
    pub fn parse(text: &str) -> Result<Self> {
        let mut device_count = None;
        let mut total_value = None;

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix(DEVICE_COUNT_PREFIX) {
                let count = rest.trim().parse::<usize>().map_err(|e| {
                    InventoryError::InvalidInput(format!("Bad device count '{}': {}", rest, e))
                })?;
                device_count = Some(count);
            } else if let Some(rest) = line.strip_prefix(TOTAL_VALUE_PREFIX) {
                let digits: String = rest
                    .trim()
                    .chars()
                    .filter(|c| *c != '$' && *c != ',')
                    .collect();
                let value = digits.parse::<f64>().map_err(|e| {
                    InventoryError::InvalidInput(format!("Bad total value '{}': {}", rest, e))
                })?;
                total_value = Some(value);
            }
        }

        match (device_count, total_value) {
            (Some(device_count), Some(total_value)) => Ok(Self {
                device_count,
                total_value,
            }),
            _ => Err(InventoryError::InvalidInput(
                "Report summary block is incomplete".to_string(),
            )),
        }
    }
}
