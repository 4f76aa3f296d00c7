pub mod use_bills;
