use crate::domain::customer::{Customer, CustomerPage, CustomerUpdate, CustomerView};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub const MAX_RECORDS_RETRIEVED: i32 = 1000;
pub const DEFAULT_PAGE_NUMBER: i32 = 1;
pub const DEFAULT_CUSTOMERS_PER_PAGE: i32 = 10;

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns page `page_number` (1-based) of customers ordered by last name,
    /// together with the total number of stored customers.
    ///
    /// Paging parameters are checked before the store is touched. A page past
    /// the end is an empty page, not an error.
    pub fn list_customers(
        &self,
        page_number: i32,
        customers_per_page: i32,
    ) -> Result<CustomerPage, DomainError> {
        if page_number < 1 {
            return Err(DomainError::InvalidOperation(
                "PageNumber must be at least 1".to_string(),
            ));
        }
        if customers_per_page < 1 {
            return Err(DomainError::InvalidOperation(
                "CustomersPerPage must be at least 1".to_string(),
            ));
        }
        if customers_per_page > MAX_RECORDS_RETRIEVED {
            return Err(DomainError::InvalidOperation(format!(
                "There is a limit of max {MAX_RECORDS_RETRIEVED} customers per page."
            )));
        }

        // Both factors are bounded by i32, so the product fits in i64.
        let skip = (i64::from(page_number) - 1) * i64::from(customers_per_page);
        let total_records = self.repo.count()?;
        let customers = self
            .repo
            .fetch_page(skip, i64::from(customers_per_page))?;

        Ok(CustomerPage {
            total_records,
            page_number,
            customers_per_page,
            customers,
        })
    }

    pub fn get_customer(&self, customer_key: i32) -> Result<Option<CustomerView>, DomainError> {
        Ok(self.repo.find_by_key(customer_key)?.map(CustomerView::from))
    }

    /// Overwrites first name, last name and gender of an existing customer.
    pub fn edit_customer(
        &self,
        customer_key: i32,
        update: CustomerUpdate,
    ) -> Result<(), DomainError> {
        update.validate()?;
        self.require(customer_key)?;
        self.repo.update(customer_key, &update)
    }

    pub fn delete_customer(&self, customer_key: i32) -> Result<(), DomainError> {
        self.require(customer_key)?;
        self.repo.delete(customer_key)
    }

    fn require(&self, customer_key: i32) -> Result<Customer, DomainError> {
        self.repo
            .find_by_key(customer_key)?
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::infrastructure::memory_repo::InMemoryCustomerRepository;

    const LAST_NAMES: [&str; 25] = [
        "Yang", "Huang", "Torres", "Zhu", "Johnson", "Ruiz", "Alvarez", "Mehta", "Verhoff",
        "Carlson", "Suarez", "Lu", "Walker", "Jenkins", "Bennett", "Nara", "Gomez", "Powell",
        "Chandra", "Foster", "Diaz", "Ortiz", "Kim", "Evans", "Quinn",
    ];

    fn seeded_service() -> CustomerService<InMemoryCustomerRepository> {
        let repo = InMemoryCustomerRepository::default();
        for (i, last) in LAST_NAMES.iter().enumerate() {
            repo.insert(Customer {
                customer_key: 11000 + i as i32,
                first_name: format!("First{i}"),
                last_name: last.to_string(),
                gender: Some(if i % 2 == 0 { "M" } else { "F" }.to_string()),
            });
        }
        CustomerService::new(repo)
    }

    fn sorted_last_names() -> Vec<String> {
        let mut names: Vec<String> = LAST_NAMES.iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn first_page_is_sorted_by_last_name() {
        let service = seeded_service();

        let page = service.list_customers(1, 10).expect("list failed");

        assert_eq!(page.total_records, 25);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.customers_per_page, 10);
        let names: Vec<String> = page.customers.into_iter().map(|c| c.last_name).collect();
        assert_eq!(names, sorted_last_names()[..10].to_vec());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let service = seeded_service();

        let page = service.list_customers(3, 10).expect("list failed");

        assert_eq!(page.total_records, 25);
        let names: Vec<String> = page.customers.into_iter().map(|c| c.last_name).collect();
        assert_eq!(names, sorted_last_names()[20..].to_vec());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let service = seeded_service();

        let page = service.list_customers(4, 10).expect("list failed");

        assert_eq!(page.total_records, 25);
        assert!(page.customers.is_empty());
    }

    #[test]
    fn largest_page_number_is_an_empty_page() {
        let service = seeded_service();

        let page = service
            .list_customers(i32::MAX, MAX_RECORDS_RETRIEVED)
            .expect("list failed");

        assert_eq!(page.page_number, i32::MAX);
        assert!(page.customers.is_empty());
    }

    #[test]
    fn rejects_page_number_below_one() {
        let service = seeded_service();

        for page_number in [0, -1] {
            let err = service.list_customers(page_number, 10).unwrap_err();
            assert!(matches!(err, DomainError::InvalidOperation(_)));
            assert_eq!(err.to_string(), "PageNumber must be at least 1");
        }
    }

    #[test]
    fn rejects_page_size_above_limit() {
        let service = seeded_service();

        assert!(service.list_customers(1, MAX_RECORDS_RETRIEVED).is_ok());
        let err = service
            .list_customers(1, MAX_RECORDS_RETRIEVED + 1)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "There is a limit of max 1000 customers per page."
        );
    }

    #[test]
    fn rejects_non_positive_page_size() {
        let service = seeded_service();

        for per_page in [0, -5] {
            let err = service.list_customers(1, per_page).unwrap_err();
            assert!(matches!(err, DomainError::InvalidOperation(_)));
        }
    }

    /// Repository that counts calls so tests can assert validation happens first.
    #[derive(Default)]
    struct CountingRepo {
        calls: AtomicUsize,
    }

    impl CustomerRepository for CountingRepo {
        fn count(&self) -> Result<i64, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        }
        fn fetch_page(&self, _: i64, _: i64) -> Result<Vec<CustomerView>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
        fn find_by_key(&self, _: i32) -> Result<Option<Customer>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
        fn update(&self, _: i32, _: &CustomerUpdate) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn delete(&self, _: i32) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn invalid_input_never_reaches_the_store() {
        let service = CustomerService::new(CountingRepo::default());

        assert!(service.list_customers(0, 10).is_err());
        assert!(service.list_customers(1, 1001).is_err());
        let bad = CustomerUpdate {
            gender: Some("XY".to_string()),
            ..CustomerUpdate::default()
        };
        assert!(service.edit_customer(1, bad).is_err());

        assert_eq!(service.repo.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn get_projects_existing_customer() {
        let service = seeded_service();

        let view = service
            .get_customer(11000)
            .expect("get failed")
            .expect("customer should exist");

        assert_eq!(view.first_name, "First0");
        assert_eq!(view.last_name, "Yang");
        assert_eq!(view.gender.as_deref(), Some("M"));
    }

    #[test]
    fn unknown_key_is_not_found_everywhere() {
        let service = seeded_service();

        assert!(service.get_customer(99999).expect("get failed").is_none());
        assert!(matches!(
            service.edit_customer(99999, CustomerUpdate::default()),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(
            service.delete_customer(99999),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn edit_overwrites_all_three_fields() {
        let service = seeded_service();

        service
            .edit_customer(
                11001,
                CustomerUpdate {
                    first_name: "UpdatedFirstName".to_string(),
                    last_name: "UpdatedLastName".to_string(),
                    gender: None,
                },
            )
            .expect("edit failed");

        let stored = service.repo.get(11001).expect("customer should exist");
        assert_eq!(stored.customer_key, 11001);
        assert_eq!(stored.first_name, "UpdatedFirstName");
        assert_eq!(stored.last_name, "UpdatedLastName");
        assert_eq!(stored.gender, None);
    }

    #[test]
    fn delete_removes_and_second_delete_is_not_found() {
        let service = seeded_service();

        service.delete_customer(11002).expect("delete failed");

        assert!(service.get_customer(11002).expect("get failed").is_none());
        assert!(matches!(
            service.delete_customer(11002),
            Err(DomainError::NotFound)
        ));
        assert_eq!(service.list_customers(1, 10).unwrap().total_records, 24);
    }
}
