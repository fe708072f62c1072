//! # Store Configuration
//!
//! Configuration management for the product store.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKROOM_SUBMIT_DELAY_MS=0                                        │
//! │     STOCKROOM_SEED_CATALOG=false                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOCKROOM_CONFIG, or                                              │
//! │     ~/.config/stockroom/stockroom.toml (Linux)                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     500 ms submit delay, demo catalog seeded                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # stockroom.toml
//! [store]
//! submit_delay_ms = 500
//! seed_catalog = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Upper bound accepted for the simulated submit delay.
pub const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

fn default_submit_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

/// Product store behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Simulated latency before an add/edit commits.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Start with the demo catalog instead of an empty store.
    #[serde(default = "default_true")]
    pub seed_catalog: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            submit_delay_ms: default_submit_delay_ms(),
            seed_catalog: true,
        }
    }
}

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, then `$STOCKROOM_CONFIG`, then the
    ///    platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os("STOCKROOM_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.store.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(StoreError::InvalidConfig(format!(
                "submit_delay_ms must be at most {}, got {}",
                MAX_SUBMIT_DELAY_MS, self.store.submit_delay_ms
            )));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(delay) = std::env::var("STOCKROOM_SUBMIT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => {
                    debug!(submit_delay_ms = ms, "Overriding submit delay from environment");
                    self.store.submit_delay_ms = ms;
                }
                Err(_) => warn!(value = %delay, "Ignoring non-numeric STOCKROOM_SUBMIT_DELAY_MS"),
            }
        }

        if let Ok(seed) = std::env::var("STOCKROOM_SEED_CATALOG") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.store.seed_catalog = true,
                "0" | "false" | "no" => self.store.seed_catalog = false,
                _ => warn!(value = %seed, "Unknown STOCKROOM_SEED_CATALOG value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.store.submit_delay_ms)
    }

    pub fn seed_catalog(&self) -> bool {
        self.store.seed_catalog
    }

    /// Config with no submit delay, for callers that commit immediately.
    pub fn immediate() -> Self {
        StoreConfig {
            store: StoreSettings {
                submit_delay_ms: 0,
                ..StoreSettings::default()
            },
        }
    }
}
