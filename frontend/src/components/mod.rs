pub mod bill_detail;
pub mod bill_form;
pub mod bill_list;
pub mod header;
