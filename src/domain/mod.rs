pub mod customer;
pub mod discount;
pub mod errors;
pub mod ports;
