//! # Store Configuration
//!
//! Where bills are kept and under which key. Native callers can persist the
//! configuration as a small YAML file:
//!
//! ```yaml
//! store_key: "bills"
//! data_directory: "/home/alex/.local/share/Bill Splitter"
//! ```
//!
//! Browser builds only use `store_key`; the data directory is meaningless there.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the bill list is stored when nothing else is configured
pub const DEFAULT_STORE_KEY: &str = "bills";

/// Name of the application folder inside the platform data directory
pub const APP_DIRECTORY_NAME: &str = "Bill Splitter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store-wide key the bill list is saved under
    #[serde(default = "default_store_key")]
    pub store_key: String,
    /// Directory holding file-backed stores
    #[serde(default = "StoreConfig::default_data_directory")]
    pub data_directory: PathBuf,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_key: default_store_key(),
            data_directory: Self::default_data_directory(),
        }
    }
}

impl StoreConfig {
    /// Platform data directory (e.g. `~/.local/share/Bill Splitter`), or a
    /// relative `Bill Splitter` folder when the platform has none
    pub fn default_data_directory() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(APP_DIRECTORY_NAME))
    }

    /// Load the configuration from a YAML file, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No store config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store config {}", path.display()))?;
        let config: StoreConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid store config {}", path.display()))?;

        if config.store_key.trim().is_empty() {
            return Err(anyhow::anyhow!("Store key in {} cannot be empty", path.display()));
        }

        info!("Loaded store config from {:?}", path);
        Ok(config)
    }

    /// Save the configuration as YAML using a temp file and rename
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved store config to {:?}", path);
        Ok(())
    }
}
