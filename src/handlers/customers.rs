use actix_web::{error, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::application::customer_service::{
    CustomerService, DEFAULT_CUSTOMERS_PER_PAGE, DEFAULT_PAGE_NUMBER,
};
use crate::domain::customer::{CustomerPage, CustomerUpdate, CustomerView};
use crate::domain::discount::calculate_discount;
use crate::domain::ports::CustomerRepository;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page_number")]
    pub page_number: i32,
    /// Number of customers per page. Defaults to 10, maximum 1000.
    #[serde(default = "default_customers_per_page")]
    pub customers_per_page: i32,
}

fn default_page_number() -> i32 {
    DEFAULT_PAGE_NUMBER
}

fn default_customers_per_page() -> i32 {
    DEFAULT_CUSTOMERS_PER_PAGE
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
}

impl From<CustomerView> for CustomerResponse {
    fn from(v: CustomerView) -> Self {
        Self {
            first_name: v.first_name,
            last_name: v.last_name,
            gender: v.gender,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersResponse {
    pub total_records: i64,
    pub page_number: i32,
    pub customers_per_page: i32,
    pub customers: Vec<CustomerResponse>,
}

impl From<CustomerPage> for ListCustomersResponse {
    fn from(page: CustomerPage) -> Self {
        Self {
            total_records: page.total_records,
            page_number: page.page_number,
            customers_per_page: page.customers_per_page,
            customers: page.customers.into_iter().map(CustomerResponse::from).collect(),
        }
    }
}

/// Body of `PUT /{id}`. Absent fields overwrite with empty/null values.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(r: UpdateCustomerRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            gender: r.gender,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountParams {
    #[serde(default)]
    pub original_price: i32,
    #[serde(default)]
    pub discount_percentage: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub original_price: i32,
    pub discount_percentage: i32,
    pub discounted_price: i32,
}

// ── Routing ──────────────────────────────────────────────────────────────────

/// Registers the `/api/v1/customers` routes.
///
/// The caller must provide a `web::Data<CustomerService<R>>` as app data.
pub fn routes<R: CustomerRepository>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::scope("/api/v1/customers")
                .service(web::resource("").route(web::get().to(list_customers::<R>)))
                .route("/echo", web::get().to(echo))
                .route("/calculate-discount", web::get().to(discount))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(get_customer::<R>))
                        .route(web::put().to(edit_customer::<R>))
                        .route(web::delete().to(delete_customer::<R>)),
                ),
        );
}

const BODY_REQUIRED: &str = "Updated customer data is required.";

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        // EOF before the first character: the request carried no body at all.
        error::JsonPayloadError::Deserialize(ref e)
            if e.is_eof() && e.line() == 1 && e.column() == 0 =>
        {
            AppError::BadRequest(BODY_REQUIRED.to_string()).into()
        }
        other => AppError::BadRequest(other.to_string()).into(),
    }
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/customers/echo
pub async fn echo() -> HttpResponse {
    HttpResponse::Ok().json("Echo")
}

/// GET /api/v1/customers/calculate-discount
///
/// Applies `discountPercentage` (0-100) to `originalPrice` and echoes the inputs.
pub async fn discount(query: web::Query<DiscountParams>) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let discounted_price = calculate_discount(params.original_price, params.discount_percentage)?;

    Ok(HttpResponse::Ok().json(DiscountResponse {
        original_price: params.original_price,
        discount_percentage: params.discount_percentage,
        discounted_price,
    }))
}

/// GET /api/v1/customers
///
/// Returns one page of customers ordered by last name, plus the total count.
/// Use `pageNumber` (1-based) and `customersPerPage` to control pagination.
pub async fn list_customers<R: CustomerRepository>(
    service: web::Data<CustomerService<R>>,
    query: web::Query<ListCustomersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    let page = web::block(move || {
        service.list_customers(params.page_number, params.customers_per_page)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListCustomersResponse::from(page)))
}

/// GET /api/v1/customers/{id}
pub async fn get_customer<R: CustomerRepository>(
    service: web::Data<CustomerService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_key = path.into_inner();

    let result = web::block(move || service.get_customer(customer_key))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(customer) => Ok(HttpResponse::Ok().json(CustomerResponse::from(customer))),
        None => Err(AppError::NotFound),
    }
}

/// PUT /api/v1/customers/{id}
///
/// Replaces first name, last name and gender of the customer. An empty or
/// JSON `null` body is rejected with 400.
pub async fn edit_customer<R: CustomerRepository>(
    service: web::Data<CustomerService<R>>,
    path: web::Path<i32>,
    body: web::Json<Option<UpdateCustomerRequest>>,
) -> Result<HttpResponse, AppError> {
    let customer_key = path.into_inner();
    let Some(body) = body.into_inner() else {
        return Err(AppError::BadRequest(BODY_REQUIRED.to_string()));
    };

    web::block(move || service.edit_customer(customer_key, body.into()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/v1/customers/{id}
pub async fn delete_customer<R: CustomerRepository>(
    service: web::Data<CustomerService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_key = path.into_inner();

    web::block(move || service.delete_customer(customer_key))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
