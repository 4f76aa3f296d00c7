//! # Storage Module
//!
//! Handles all data persistence for the bill splitter.
//!
//! Bills are persisted as a single ordered list under one store-wide key.
//! Where that key lives is decided by a [`Connection`]: a file in the data
//! directory, browser local storage, or plain memory for tests. Repositories
//! only deal in serialized documents, so the domain layer never learns which
//! one it is talking to.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Domain depends on [`BillStorage`], not on files
//! - **Explicit Handles**: Connections are created at startup and passed in,
//!   never looked up from a global

pub mod json;
pub mod traits;

pub use json::{BillRepository, FileConnection, MemoryConnection};
pub use traits::{BillStorage, Connection};
