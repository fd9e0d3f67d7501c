use super::customer::{Customer, CustomerUpdate, CustomerView};
use super::errors::DomainError;

/// Storage port for customer records.
///
/// Every mutating call commits before it returns. `update` and `delete`
/// report [`DomainError::NotFound`] when no record carries the given key.
pub trait CustomerRepository: Send + Sync + 'static {
    fn count(&self) -> Result<i64, DomainError>;
    /// Up to `take` projected customers ordered by last name, after skipping `skip`.
    fn fetch_page(&self, skip: i64, take: i64) -> Result<Vec<CustomerView>, DomainError>;
    fn find_by_key(&self, customer_key: i32) -> Result<Option<Customer>, DomainError>;
    fn update(&self, customer_key: i32, update: &CustomerUpdate) -> Result<(), DomainError>;
    fn delete(&self, customer_key: i32) -> Result<(), DomainError>;
}
