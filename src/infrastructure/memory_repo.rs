use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::customer::{Customer, CustomerUpdate, CustomerView};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

/// Process-local customer store keyed by customer key.
///
/// Pages are ordered by the byte value of the last name, ties broken by key.
/// The Postgres adapter orders the same way because `last_name` is declared
/// with the "C" collation.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<BTreeMap<i32, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        let repo = Self::default();
        for customer in customers {
            repo.insert(customer);
        }
        repo
    }

    /// Inserts or replaces the customer stored under its key.
    pub fn insert(&self, customer: Customer) {
        self.lock().insert(customer.customer_key, customer);
    }

    pub fn get(&self, customer_key: i32) -> Option<Customer> {
        self.lock().get(&customer_key).cloned()
    }

    // A panic while holding the lock cannot leave a map entry half-written.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<i32, Customer>> {
        self.customers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn count(&self) -> Result<i64, DomainError> {
        Ok(self.lock().len() as i64)
    }

    fn fetch_page(&self, skip: i64, take: i64) -> Result<Vec<CustomerView>, DomainError> {
        let customers = self.lock();
        let mut ordered: Vec<&Customer> = customers.values().collect();
        ordered.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then(a.customer_key.cmp(&b.customer_key))
        });

        let skip = usize::try_from(skip.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(take.max(0)).unwrap_or(usize::MAX);
        Ok(ordered
            .into_iter()
            .skip(skip)
            .take(take)
            .cloned()
            .map(CustomerView::from)
            .collect())
    }

    fn find_by_key(&self, customer_key: i32) -> Result<Option<Customer>, DomainError> {
        Ok(self.get(customer_key))
    }

    fn update(&self, customer_key: i32, update: &CustomerUpdate) -> Result<(), DomainError> {
        let mut customers = self.lock();
        let customer = customers
            .get_mut(&customer_key)
            .ok_or(DomainError::NotFound)?;
        customer.first_name = update.first_name.clone();
        customer.last_name = update.last_name.clone();
        customer.gender = update.gender.clone();
        Ok(())
    }

    fn delete(&self, customer_key: i32) -> Result<(), DomainError> {
        self.lock()
            .remove(&customer_key)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}
