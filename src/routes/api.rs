use actix_web::{HttpResponse, Responder, web};

use crate::dto::customers::{CustomerListing, customer_views};

/// JSON version of the customer list; honours `?search=` like the index page.
pub async fn api_v1_customers(listing: web::ReqData<CustomerListing>) -> impl Responder {
    HttpResponse::Ok().json(customer_views(&listing.customers))
}
