use actix_web::{HttpResponse, post, web};

use crate::forms::reservations::ReservationForm;
use crate::repository::DieselRepository;
use crate::routes::{customer_id, redirect};
use crate::services::ServiceResult;
use crate::services::reservations as reservation_service;

#[post("/{id}/add-reservation/")]
pub async fn add_reservation(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ReservationForm>,
) -> ServiceResult<HttpResponse> {
    let id = customer_id(id.into_inner())?;
    reservation_service::add_reservation(repo.get_ref(), id, &form)?;

    Ok(redirect(&format!("/{id}/")))
}
