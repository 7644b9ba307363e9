//! Report writer
//!
//! Renders the inventory into the report format and writes it to a sink.

use std::fmt;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::Result;
use crate::inventory::Inventory;

use super::{
    ReportSummary, DEVICE_COUNT_PREFIX, REPORT_COLUMNS, REPORT_FOOTER, REPORT_RULE, REPORT_TITLE,
    TOTAL_VALUE_PREFIX,
};

/// A report over a borrowed inventory
///
/// Borrowing immutably means the store cannot change while a report is
/// being written.
pub struct Report<'a> {
    inventory: &'a Inventory,
    generated_on: NaiveDate,
}

impl<'a> Report<'a> {
    /// Report dated with the local date
    pub fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            generated_on: chrono::Local::now().date_naive(),
        }
    }

    /// Override the generation date
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    /// Summary figures as they will appear in the report
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            device_count: self.inventory.len(),
            total_value: self.inventory.total_value(),
        }
    }

    /// Render the full report text
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render and write the report to `sink`
    ///
    /// The report is rendered in full before the first byte is written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<ReportSummary> {
        let text = self.render();
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(self.summary())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f, "Generated on: {}", self.generated_on.format("%Y-%m-%d"))?;
        writeln!(f, "{}", REPORT_RULE)?;
        writeln!(f, "{}", REPORT_COLUMNS)?;
        writeln!(f, "{}", REPORT_RULE)?;

        // One row per device
        for (i, device) in self.inventory.devices().enumerate() {
            writeln!(
                f,
                "| {} | {} | {} | ${:.2} | {} |",
                i + 1,
                device.category(),
                device.name(),
                device.price(),
                device.quantity()
            )?;
        }

        // Summary
        let summary = self.summary();
        writeln!(f, "Summary:")?;
        writeln!(f, "{}{}", DEVICE_COUNT_PREFIX, summary.device_count)?;
        writeln!(f, "{}{}", TOTAL_VALUE_PREFIX, format_currency(summary.total_value))?;
        writeln!(f, "{}", REPORT_FOOTER)
    }
}

/// Format a value as dollars with thousands separators: `$1,234,567.89`
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, frac) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}
