//! # Domain Module
//!
//! Contains all business logic for the bill splitter.
//!
//! ## Module Organization
//!
//! - **settlement_calculator**: Pure settlement computation for a single bill
//! - **bill_service**: Bill lifecycle (create, list, delete) and settlement queries
//! - **bill_form**: Bill creation form parsing and validation
//! - **settlement_summary**: Display formatting and "why no transfers" notes
//! - **models**: Validation rules and errors for stored bills
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: Services take any [`crate::storage::BillStorage`]
//! - **UI Agnostic**: Formatting is plain data, rendering is the UI's job
//! - **Pure Core**: Settlement calculation has no state and no I/O

pub mod bill_form;
pub mod bill_service;
pub mod models;
pub mod settlement_calculator;
pub mod settlement_summary;

pub use bill_form::*;
pub use bill_service::*;
pub use models::*;
pub use settlement_calculator::*;
pub use settlement_summary::*;
