use diesel::prelude::*;

use crate::domain::customer::{Customer, CustomerUpdate, CustomerView};
use crate::schema::dim_customer;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dim_customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub customer_key: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            customer_key: row.customer_key,
            first_name: row.first_name,
            last_name: row.last_name,
            gender: row.gender,
        }
    }
}

/// Column subset loaded for list pages.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dim_customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerSummaryRow {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

impl From<CustomerSummaryRow> for CustomerView {
    fn from(row: CustomerSummaryRow) -> Self {
        CustomerView {
            first_name: row.first_name,
            last_name: row.last_name,
            gender: row.gender,
        }
    }
}

/// Every mutable column is written; a `None` gender clears the stored value.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = dim_customer)]
#[diesel(treat_none_as_null = true)]
pub struct CustomerChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub gender: Option<&'a str>,
}

impl<'a> From<&'a CustomerUpdate> for CustomerChangeset<'a> {
    fn from(update: &'a CustomerUpdate) -> Self {
        CustomerChangeset {
            first_name: &update.first_name,
            last_name: &update.last_name,
            gender: update.gender.as_deref(),
        }
    }
}

/// Customers are provisioned outside this service; only test fixtures insert.
#[cfg(test)]
#[derive(Debug, Insertable)]
#[diesel(table_name = dim_customer)]
pub struct NewCustomerRow {
    pub customer_key: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

#[cfg(test)]
impl From<Customer> for NewCustomerRow {
    fn from(c: Customer) -> Self {
        NewCustomerRow {
            customer_key: c.customer_key,
            first_name: c.first_name,
            last_name: c.last_name,
            gender: c.gender,
        }
    }
}
