//! Browser `localStorage` connection for the bill store.
//!
//! The bill list lives under a single key as the JSON array text written by
//! the repository. Values are stored raw, not through gloo's JSON helpers,
//! so the stored document stays a plain array.

use anyhow::{anyhow, Result};
use bill_splitter_backend::Connection;
use gloo::storage::{LocalStorage, Storage};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageConnection;

impl Connection for LocalStorageConnection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read {} from local storage: {:?}", key, e))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, contents)
            .map_err(|e| anyhow!("Failed to write {} to local storage: {:?}", key, e))
    }

    fn describe(&self, key: &str) -> String {
        format!("localStorage:{}", key)
    }
}
