use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use tera::{Context, Tera};

use crate::dto::customers::{CustomerListing, CustomerView, ReservationView, customer_views};
use crate::forms::customers::CustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{customer_id, redirect, render_template, render_template_with_status};
use crate::services::customers as customer_service;
use crate::services::{ServiceError, ServiceResult};

/// Customer list, filled in by the search middleware.
pub async fn show_index(
    listing: web::ReqData<CustomerListing>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("customers", &customer_views(&listing.customers));
    if let Some(search) = &listing.search {
        context.insert("search_query", search);
    }

    render_template(&tera, "customers/index.html", &context)
}

#[get("/best/")]
pub async fn show_best_customers(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> ServiceResult<HttpResponse> {
    let customers = customer_service::list_best_customers(repo.get_ref())?;

    let mut context = Context::new();
    context.insert("current_page", "best");
    context.insert("customers", &customer_views(&customers));

    Ok(render_template(&tera, "customers/best.html", &context))
}

fn render_form(
    tera: &Tera,
    form: &CustomerForm,
    action: &str,
    title: &str,
    error: Option<&str>,
) -> HttpResponse {
    let mut context = Context::new();
    context.insert("current_page", "form");
    context.insert("title", title);
    context.insert("action", action);
    context.insert("first_name", &form.first_name);
    context.insert("last_name", &form.last_name);
    context.insert("phone", &form.phone);
    context.insert("notes", &form.notes);

    match error {
        Some(error) => {
            context.insert("error", error);
            render_template_with_status(
                tera,
                "customers/form.html",
                &context,
                StatusCode::BAD_REQUEST,
            )
        }
        None => render_template(tera, "customers/form.html", &context),
    }
}

#[get("/add/")]
pub async fn new_customer_form(tera: web::Data<Tera>) -> impl Responder {
    render_form(&tera, &CustomerForm::default(), "/add/", "Add a Customer", None)
}

#[post("/add/")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<CustomerForm>,
) -> ServiceResult<HttpResponse> {
    match customer_service::add_customer(repo.get_ref(), &form) {
        Ok(id) => Ok(redirect(&format!("/{id}/"))),
        Err(ServiceError::Form(message)) => Ok(render_form(
            &tera,
            &form,
            "/add/",
            "Add a Customer",
            Some(&message),
        )),
        Err(err) => Err(err),
    }
}

#[get("/{id}/")]
pub async fn show_customer(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> ServiceResult<HttpResponse> {
    let id = customer_id(id.into_inner())?;
    let page = customer_service::load_customer_page(repo.get_ref(), id).inspect_err(|err| {
        if !matches!(err, ServiceError::NotFound(_)) {
            error!("Failed to load customer {id}: {err}");
        }
    })?;

    let reservations = page
        .reservations
        .iter()
        .map(ReservationView::from)
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("current_page", "customer");
    context.insert("customer", &CustomerView::from(&page.customer));
    context.insert("reservations", &reservations);

    Ok(render_template(&tera, "customers/detail.html", &context))
}

#[get("/{id}/edit/")]
pub async fn edit_customer_form(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> ServiceResult<HttpResponse> {
    let id = customer_id(id.into_inner())?;
    let customer = customer_service::get_customer(repo.get_ref(), id)?;
    let form = CustomerForm::from_customer(&customer);

    Ok(render_form(
        &tera,
        &form,
        &format!("/{id}/edit/"),
        &format!("Edit {}", customer.full_name()),
        None,
    ))
}

#[post("/{id}/edit/")]
pub async fn save_customer(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<CustomerForm>,
) -> ServiceResult<HttpResponse> {
    let id = customer_id(id.into_inner())?;

    match customer_service::update_customer(repo.get_ref(), id, &form) {
        Ok(_) => Ok(redirect(&format!("/{id}/"))),
        Err(ServiceError::Form(message)) => Ok(render_form(
            &tera,
            &form,
            &format!("/{id}/edit/"),
            "Edit Customer",
            Some(&message),
        )),
        Err(err) => Err(err),
    }
}
