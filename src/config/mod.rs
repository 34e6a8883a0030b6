//! # Configuration Management Module
//!
//! Centralized configuration for the vendor subsystem, loaded from TOML.
//!
//! ## Configuration Structure
//!
//! - [`VendorConfig`] - Economy mode, pricing defaults and vendor timings
//! - [`StorageConfig`] - Snapshot store location
//! - [`LoggingConfig`] - Logging and debugging settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use meshvendor::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("meshvendor.toml").await?;
//!     println!("Economy: {}", config.vendor.economy_mode);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [vendor]
//! economy_mode = "direct_hold"
//! default_price = 999
//!
//! [storage]
//! data_dir = "data"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! The economy mode is read when a vendor is created or loaded from a
//! snapshot. Changing it does not touch vendors that are already running.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::vendor::types::EconomyMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorConfig {
    /// Billing model given to newly created or migrated vendors.
    #[serde(default)]
    pub economy_mode: EconomyMode,
    /// Placeholder price for items dropped into storage before the owner prices them.
    #[serde(default = "default_price")]
    pub default_price: i32,
    /// Real seconds per in-world minute; one in-world day is 1440 of these.
    #[serde(default = "default_seconds_per_world_minute")]
    pub seconds_per_world_minute: u32,
    /// How far outside its house a vendor may be called, in tiles.
    #[serde(default = "default_relocation_range")]
    pub relocation_range: i32,
    #[serde(default = "default_relocation_timeout_secs")]
    pub relocation_timeout_secs: u64,
    /// Minimum age of a price before the item can be bought.
    #[serde(default = "default_purchase_cooldown_secs")]
    pub purchase_cooldown_secs: u64,
    /// Days a retired vendor's inventory record waits for its owner.
    #[serde(default = "default_inventory_grace_days")]
    pub inventory_grace_days: u32,
    #[serde(default = "default_shop_name")]
    pub default_shop_name: String,
}

fn default_price() -> i32 {
    999
}

fn default_seconds_per_world_minute() -> u32 {
    5
}

fn default_relocation_range() -> i32 {
    5
}

fn default_relocation_timeout_secs() -> u64 {
    120
}

fn default_purchase_cooldown_secs() -> u64 {
    60
}

fn default_inventory_grace_days() -> u32 {
    7
}

fn default_shop_name() -> String {
    "Shop Not Yet Named".to_string()
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            economy_mode: EconomyMode::default(),
            default_price: default_price(),
            seconds_per_world_minute: default_seconds_per_world_minute(),
            relocation_range: default_relocation_range(),
            relocation_timeout_secs: default_relocation_timeout_secs(),
            purchase_cooldown_secs: default_purchase_cooldown_secs(),
            inventory_grace_days: default_inventory_grace_days(),
            default_shop_name: default_shop_name(),
        }
    }
}

impl VendorConfig {
    pub fn relocation_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.relocation_timeout_secs as i64)
    }

    pub fn purchase_cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.purchase_cooldown_secs as i64)
    }

    pub fn inventory_grace(&self) -> chrono::Duration {
        chrono::Duration::days(self.inventory_grace_days as i64)
    }

    /// Reject settings the billing and relocation code cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.seconds_per_world_minute == 0 {
            return Err(anyhow!("vendor.seconds_per_world_minute must be positive"));
        }
        if !(0..=crate::vendor::types::MAX_PRICE).contains(&self.default_price) {
            return Err(anyhow!(
                "vendor.default_price must be between 0 and {}",
                crate::vendor::types::MAX_PRICE
            ));
        }
        if self.relocation_range < 0 {
            return Err(anyhow!("vendor.relocation_range cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl StorageConfig {
    /// Directory holding the sled snapshot tree.
    pub fn snapshot_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("vendors")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vendor: VendorConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;
        config.vendor.validate()?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vendor: VendorConfig::default(),
            storage: StorageConfig {
                data_dir: "data".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("meshvendor.log".to_string()),
            },
        }
    }
}
