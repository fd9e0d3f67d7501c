pub mod customer_repo;
pub mod memory_repo;
pub mod models;
