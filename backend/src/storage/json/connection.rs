//! Key/value connections backing the JSON repositories.
//!
//! `FileConnection` keeps each key in its own `{key}.json` file under a data
//! directory; `MemoryConnection` keeps everything in a shared map and is used
//! by tests and by callers that do not want anything written to disk.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::StoreConfig;
use crate::storage::traits::Connection;

/// FileConnection stores one JSON document per key inside a base directory
#[derive(Clone, Debug)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a new file connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a file connection in the directory named by the store config
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(&config.data_directory)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the JSON document that holds `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl Connection for FileConnection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No document for key '{}' at {}", key, path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        // Write to temporary file first, then atomically replace the original
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        self.path_for(key).display().to_string()
    }
}

/// In-memory connection; clones share the same underlying map
#[derive(Clone, Debug, Default)]
pub struct MemoryConnection {
    documents: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.documents
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory connection lock poisoned"))
    }
}

impl Connection for MemoryConnection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents()?.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        self.documents()?.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        format!("memory:{}", key)
    }
}
