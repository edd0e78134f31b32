use super::{validate_key, KeyValueStore};
use crate::error::{CartError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: the value for key `k` lives in `<root>/k.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. Fails for keys that aren't valid file names.
    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CartError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(CartError::Io)?;
        Ok(Some(content))
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        let target = self.value_path(key)?;
        self.ensure_dir(&self.root)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(CartError::Io)?;
        fs::rename(&tmp_path, target).map_err(CartError::Io)?;

        Ok(())
    }
}
