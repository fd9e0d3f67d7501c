pub mod customer_service;
