//! # JSON Bill Repository
//!
//! Stores every bill as one JSON array under a single store-wide key. The
//! whole array is loaded on each read and rewritten on each mutation, which
//! keeps the on-disk (or in-browser) format trivially inspectable.
//!
//! ## Document Format
//!
//! ```json
//! [
//!   {
//!     "id": "bill::1737367200000::9f2c1a7e",
//!     "name": "Dinner",
//!     "total_amount": 90.0,
//!     "designated_payer": "Alice",
//!     "split_mode": "equal",
//!     "participants": [{"name": "Alice"}, {"name": "Bob"}, {"name": "Carol"}],
//!     "created_at": "2025-01-20T10:00:00Z"
//!   }
//! ]
//! ```
//!
//! There is no schema version; the document is the ordered bill list and
//! nothing else.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use shared::Bill;

use crate::config::DEFAULT_STORE_KEY;
use crate::storage::traits::{BillStorage, Connection};

/// JSON-backed bill repository over any key/value connection
#[derive(Clone)]
pub struct BillRepository<C: Connection> {
    connection: C,
    store_key: String,
}

impl<C: Connection> BillRepository<C> {
    /// Create a repository using the default store key
    pub fn new(connection: C) -> Self {
        Self::with_store_key(connection, DEFAULT_STORE_KEY)
    }

    pub fn with_store_key(connection: C, store_key: impl Into<String>) -> Self {
        Self {
            connection,
            store_key: store_key.into(),
        }
    }

    pub fn store_key(&self) -> &str {
        &self.store_key
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Read the full bill list; a missing or blank document is an empty list
    fn read_bills(&self) -> Result<Vec<Bill>> {
        let contents = match self.connection.read(&self.store_key)? {
            Some(contents) if !contents.trim().is_empty() => contents,
            _ => return Ok(Vec::new()),
        };

        let bills: Vec<Bill> = serde_json::from_str(&contents).with_context(|| {
            format!(
                "Stored bills at {} are not valid JSON",
                self.connection.describe(&self.store_key)
            )
        })?;

        debug!("Loaded {} bills from {}", bills.len(), self.connection.describe(&self.store_key));
        Ok(bills)
    }

    /// Replace the full bill list
    fn write_bills(&self, bills: &[Bill]) -> Result<()> {
        let contents = serde_json::to_string(bills).context("Failed to serialize bills")?;
        self.connection.write(&self.store_key, &contents)?;

        debug!("Saved {} bills to {}", bills.len(), self.connection.describe(&self.store_key));
        Ok(())
    }
}

impl<C: Connection> BillStorage for BillRepository<C> {
    fn list_bills(&self) -> Result<Vec<Bill>> {
        self.read_bills()
    }

    fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>> {
        let bills = self.read_bills()?;
        Ok(bills.into_iter().find(|bill| bill.id == bill_id))
    }

    fn store_bill(&self, bill: &Bill) -> Result<()> {
        info!("Storing bill: {}", bill.id);

        let mut bills = self.read_bills()?;
        if bills.iter().any(|existing| existing.id == bill.id) {
            return Err(anyhow::anyhow!("Bill already exists: {}", bill.id));
        }
        bills.push(bill.clone());
        self.write_bills(&bills)?;

        info!("Successfully stored bill: {}", bill.id);
        Ok(())
    }

    fn delete_bill(&self, bill_id: &str) -> Result<bool> {
        let mut bills = self.read_bills()?;
        let before = bills.len();
        bills.retain(|bill| bill.id != bill_id);

        if bills.len() == before {
            warn!("Bill not found for deletion: {}", bill_id);
            return Ok(false);
        }

        self.write_bills(&bills)?;
        info!("Deleted bill: {}", bill_id);
        Ok(true)
    }
}
