//! # Storage Layer
//!
//! The cart persists exactly one value: the list of line items, stored under a
//! single name (`"shopping-cart"` unless configured otherwise). The
//! [`KeyValueStore`] trait is the whole contract the ledger needs from storage:
//! load the raw text stored under a key, or replace it.
//!
//! Typed access goes through [`read`] and [`write`], which add JSON encoding on
//! top of the raw trait. `read` never fails: a missing, unreadable or corrupt
//! value falls back to the caller's default.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── shopping-cart.json  # [{"id": 7, "quantity": 2}, ...]
//! └── config.json         # CartConfig
//! ```

use crate::error::{CartError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Abstract interface for named-value storage.
///
/// Both methods take `&self`: the file store is stateless I/O and the memory
/// store uses interior mutability.
pub trait KeyValueStore {
    /// Load the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn load_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save_raw(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        (**self).save_raw(key, value)
    }
}

/// Read the value stored under `key`, or `default` if there is none or it can't be decoded.
pub fn read<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.load_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored value, using default");
            return default;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to load stored value, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored value is corrupt, using default");
            default
        }
    }
}

/// Serialize `value` and store it under `key`, replacing any prior value.
pub fn write<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(CartError::Serialization)?;
    store.save_raw(key, &raw)?;
    debug!(key, bytes = raw.len(), "stored value");
    Ok(())
}

/// Check that `key` is usable as a storage name.
///
/// Keys become file names for [`fs::FileStore`], so they are limited to ASCII
/// alphanumerics, `-`, `_` and `.` and may not start with a dot.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CartError::Store("Storage key cannot be empty".to_string()));
    }
    if key.starts_with('.') {
        return Err(CartError::Store(format!(
            "Storage key cannot start with '.': {}",
            key
        )));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(CartError::Store(format!(
            "Invalid character '{}' in storage key: {}",
            c, key
        )));
    }
    Ok(())
}
