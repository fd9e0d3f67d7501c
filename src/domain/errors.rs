use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer not found")]
    NotFound,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    InvalidOperation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
