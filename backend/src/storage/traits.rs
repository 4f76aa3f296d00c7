//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::Bill;

/// Trait defining the interface for bill storage operations
///
/// Bills are kept as one ordered sequence; implementations must preserve
/// insertion order so listings match the order bills were created in.
pub trait BillStorage: Send + Sync {
    /// List all stored bills in insertion order
    fn list_bills(&self) -> Result<Vec<Bill>>;

    /// Retrieve a specific bill by ID
    fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>>;

    /// Append a new bill to the store
    fn store_bill(&self, bill: &Bill) -> Result<()>;

    /// Delete a bill by ID
    /// Returns true if the bill was found and deleted, false otherwise
    fn delete_bill(&self, bill_id: &str) -> Result<bool>;
}

/// Trait defining the interface for storage connections
///
/// A connection is a flat key/value handle: every key maps to one serialized
/// document. Files on disk, browser local storage and plain memory all fit
/// behind it, so repositories never need to know where their bytes live.
pub trait Connection: Send + Sync + Clone {
    /// Read the document stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`
    fn write(&self, key: &str, contents: &str) -> Result<()>;

    /// Human-readable location of `key`, used in log and error messages
    fn describe(&self, key: &str) -> String {
        key.to_string()
    }
}
