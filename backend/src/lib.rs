//! # Bill Splitter Backend
//!
//! Contains all non-UI logic for the bill splitter.
//!
//! - **Domain**: Settlement calculation, bill lifecycle, form validation
//! - **Storage**: Persisting the bill list behind a key/value connection
//! - **Config**: Where and under which key bills are stored
//!
//! The backend is UI-agnostic: the Yew frontend drives it with a browser
//! local-storage connection, tests drive it with files or memory.
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (BillService, SettlementCalculator)
//!     ↓
//! Storage Layer (BillRepository over a Connection)
//! ```

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;

pub use config::StoreConfig;
pub use domain::*;
pub use storage::*;

/// Bill service backed by the JSON repository over connection `C`
pub type JsonBillService<C> = BillService<BillRepository<C>>;

/// Main backend handle that holds all services
#[derive(Clone)]
pub struct Backend<C: Connection> {
    pub bill_service: JsonBillService<C>,
    pub bill_form_service: BillFormService,
}

impl<C: Connection> Backend<C> {
    /// Build the backend over an explicit connection and store key
    pub fn new(connection: C, store_key: &str) -> Self {
        info!("Setting up bill store under key '{}'", store_key);
        let repository = BillRepository::with_store_key(connection, store_key);

        Self {
            bill_service: BillService::new(repository),
            bill_form_service: BillFormService::new(),
        }
    }
}

/// Initialize a file-backed backend from a store config
pub fn initialize_backend(config: &StoreConfig) -> Result<Backend<FileConnection>> {
    info!("Setting up data directory {}", config.data_directory.display());
    let connection = FileConnection::from_config(config)?;
    Ok(Backend::new(connection, &config.store_key))
}
