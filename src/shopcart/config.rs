use crate::error::{CartError, Result};
use crate::store::validate_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "shopping-cart";

/// Configuration for shopcart, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartConfig {
    /// Name the cart's line items are stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl CartConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CartError::Io)?;
        let config: CartConfig =
            serde_json::from_str(&content).map_err(CartError::Serialization)?;
        validate_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CartError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CartError::Serialization)?;
        fs::write(config_path, content).map_err(CartError::Io)?;
        Ok(())
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Look up a setting by its user-facing name.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    /// Update a setting by its user-facing name.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => self.set_storage_key(value).map_err(|e| e.to_string()),
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Set the storage key, rejecting names the file store can't use.
    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        validate_key(key)?;
        self.storage_key = key.to_string();
        Ok(())
    }
}
