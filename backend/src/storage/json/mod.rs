//! JSON document storage.
//!
//! ```text
//! data/
//! ├── config.yaml   ← optional store configuration
//! └── bills.json    ← every bill, as one ordered JSON array
//! ```

pub mod bill_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use bill_repository::BillRepository;
pub use connection::{FileConnection, MemoryConnection};
