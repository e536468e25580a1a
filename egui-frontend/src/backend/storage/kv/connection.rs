//! File-backed key-value store.
//!
//! Each key maps to a single JSON document under the base directory.
//! Writes go through a temp file and rename so a crash mid-write never
//! leaves a half-written document behind.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// KvConnection manages the base directory all documents live under.
#[derive(Clone)]
pub struct KvConnection {
    base_directory: PathBuf,
}

impl KvConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the platform data directory.
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;
        Self::new(data_dir.join("sensor-tracker"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the document stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        debug!("Read key '{}' from {}", key, path.display());
        Ok(Some(value))
    }

    /// Write `value` under `key`, atomically.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote key '{}' to {}", key, path.display());
        Ok(())
    }
}
