//! HTTP handlers and the shared helpers they use.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use log::error;
use tera::{Context, Tera};

use crate::domain::types::CustomerId;
use crate::middleware::SearchCustomers;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, ServiceResult};

pub mod api;
pub mod customers;
pub mod reservations;

/// Registers every Lunchly route.
///
/// Listing views sit behind [`SearchCustomers`]; the fixed paths are
/// registered before `/{id}/` so they are never parsed as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig, repo: DieselRepository) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(customers::show_index))
            .wrap(SearchCustomers::new(repo.clone())),
    )
    .service(
        web::resource("/api/v1/customers")
            .route(web::get().to(api::api_v1_customers))
            .wrap(SearchCustomers::new(repo)),
    )
    .service(customers::show_best_customers)
    .service(customers::new_customer_form)
    .service(customers::add_customer)
    .service(customers::show_customer)
    .service(customers::edit_customer_form)
    .service(customers::save_customer)
    .service(reservations::add_reservation);
}

/// Renders `template` or answers 500 when Tera fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Turns a path segment into a customer id; ids the store never issues are
/// reported the same way as missing customers.
pub(crate) fn customer_id(raw: i32) -> ServiceResult<CustomerId> {
    CustomerId::new(raw).map_err(|_| ServiceError::NotFound(format!("No such customer: {raw}")))
}
