//! Configuration loading and typed config structures for the Homestead
//! engine.
//!
//! The canonical configuration lives in `homestead-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and
//! provides a loader that reads the file. Every section is optional; a
//! missing file section falls back to the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use homestead_catalog::StaticCatalog;
use homestead_types::FruitSeedName;

use crate::replay::ReplayOptions;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "homestead-config.yaml";

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "HOMESTEAD_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `homestead-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomesteadConfig {
    /// Catalog overrides.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Replay behavior.
    #[serde(default)]
    pub replay: ReplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HomesteadConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `HOMESTEAD_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            let mut config = Self::default();
            config.logging.apply_env_overrides();
            return Ok(config);
        }
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// The built-in catalog with this configuration's overrides applied.
    pub fn build_catalog(&self) -> StaticCatalog {
        let mut catalog = StaticCatalog::new();
        for (seed, entry) in &self.catalog.seeds {
            if !catalog.override_seed(*seed, entry.plant_seconds, entry.harvest_count) {
                warn!(%seed, "catalog override for unknown seed ignored");
            }
        }
        catalog
    }
}

/// Catalog overrides, keyed by seed name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Per-seed overrides. Seeds not listed keep their built-in values.
    #[serde(default)]
    pub seeds: BTreeMap<FruitSeedName, SeedOverride>,
}

/// Override for a single seed. Absent fields keep the built-in value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SeedOverride {
    /// Seconds until ripe.
    #[serde(default)]
    pub plant_seconds: Option<u64>,

    /// Harvests per planted tree.
    #[serde(default)]
    pub harvest_count: Option<u32>,
}

/// Replay behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReplayConfig {
    /// Abort on the first rejected action instead of skipping it.
    #[serde(default = "default_true")]
    pub stop_on_first_rejection: bool,
}

impl ReplayConfig {
    /// Replay options for this configuration.
    pub const fn options(&self) -> ReplayOptions {
        ReplayOptions {
            stop_on_first_rejection: self.stop_on_first_rejection,
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            stop_on_first_rejection: default_true(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `HOMESTEAD_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_level_override(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace the level with `level` if it is present and non-empty.
    pub fn apply_level_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|level| !level.trim().is_empty()) {
            self.level = level;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    String::from("info")
}
