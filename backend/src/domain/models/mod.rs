pub mod bill;

pub use bill::{validate_bill, BillLimits, BillValidationError};
