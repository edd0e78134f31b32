use crate::api::{CartApi, CartPaths};
use crate::config::CartConfig;
use crate::error::{CartError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SHOPCART_HOME";

pub struct CartContext {
    pub api: CartApi<FileStore>,
    pub config: CartConfig,
}

/// Pick the data directory: explicit override, then `SHOPCART_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shopcart", "shopcart")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CartError::Store("Could not determine data directory".to_string()))
}

/// Build a ready-to-use API with an active cart session.
pub fn initialize(data_dir: Option<PathBuf>) -> Result<CartContext> {
    let data_dir = resolve_data_dir(data_dir)?;
    debug!(data_dir = %data_dir.display(), "initializing cart");

    let config = CartConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        CartConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let paths = CartPaths { data_dir };
    let api = CartApi::start(store, config.storage_key(), paths);

    Ok(CartContext { api, config })
}
