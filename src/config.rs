//! Configuration for Stockroom
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Stockroom shop
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Report Configuration
    // -------------------------------------------------------------------------
    /// Destination of the exported inventory report.
    /// Fixed per run, never prompted from the user.
    pub report_path: PathBuf,

    // -------------------------------------------------------------------------
    // Inventory Configuration
    // -------------------------------------------------------------------------
    /// Initial inventory contents
    pub seed: Seed,

    /// Whether the store enforces unique device names on add
    pub name_policy: NamePolicy,
}

/// Where the initial inventory comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// The five starter devices, one per category
    Defaults,

    /// Start with nothing
    Empty,

    /// JSON array of devices read from a file
    File(PathBuf),
}

/// Name uniqueness policy for `Inventory::add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Reject a device whose name already exists (case-insensitive)
    #[default]
    Unique,

    /// Accept duplicates; lookups act on the first match
    AllowDuplicates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("inventory.txt"),
            seed: Seed::Defaults,
            name_policy: NamePolicy::Unique,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the report destination
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.report_path = path.into();
        self
    }

    /// Set the initial inventory source
    pub fn seed(mut self, seed: Seed) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the name uniqueness policy
    pub fn name_policy(mut self, policy: NamePolicy) -> Self {
        self.config.name_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
