use super::errors::DomainError;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_GENDER_LENGTH: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_key: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

/// Public projection of a customer; the key is never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerView {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

impl From<Customer> for CustomerView {
    fn from(c: Customer) -> Self {
        Self {
            first_name: c.first_name,
            last_name: c.last_name,
            gender: c.gender,
        }
    }
}

/// Replacement values for the mutable fields. All three are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

impl CustomerUpdate {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_length("FirstName", &self.first_name, MAX_NAME_LENGTH)?;
        check_length("LastName", &self.last_name, MAX_NAME_LENGTH)?;
        if let Some(gender) = &self.gender {
            check_length("Gender", gender, MAX_GENDER_LENGTH)?;
        }
        Ok(())
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::InvalidArgument(format!(
            "{field} must be at most {max} characters."
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CustomerPage {
    pub total_records: i64,
    pub page_number: i32,
    pub customers_per_page: i32,
    pub customers: Vec<CustomerView>,
}
