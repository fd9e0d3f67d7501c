use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, CustomerUpdate, CustomerView};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::dim_customer;

use super::models::{CustomerChangeset, CustomerRow, CustomerSummaryRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(dim_customer::table.count().get_result(&mut conn)?)
    }

    fn fetch_page(&self, skip: i64, take: i64) -> Result<Vec<CustomerView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = dim_customer::table
            .select(CustomerSummaryRow::as_select())
            .order((dim_customer::last_name.asc(), dim_customer::customer_key.asc()))
            .offset(skip)
            .limit(take)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(CustomerView::from).collect())
    }

    fn find_by_key(&self, customer_key: i32) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = dim_customer::table
            .find(customer_key)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn update(&self, customer_key: i32, update: &CustomerUpdate) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(dim_customer::table.find(customer_key))
            .set(&CustomerChangeset::from(update))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn delete(&self, customer_key: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected =
            diesel::delete(dim_customer::table.find(customer_key)).execute(&mut conn)?;

        if affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
