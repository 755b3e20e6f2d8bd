use log::error;
use validator::Validate;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::CustomerId;
use crate::forms::FormError;
use crate::forms::reservations::ReservationForm;
use crate::repository::{CustomerReader, ReservationWriter};
use crate::services::customers::get_customer;
use crate::services::{ServiceError, ServiceResult};

/// Books a table for an existing customer.
pub fn add_reservation<R>(
    repo: &R,
    customer_id: CustomerId,
    form: &ReservationForm,
) -> ServiceResult<Reservation>
where
    R: CustomerReader + ReservationWriter + ?Sized,
{
    form.validate().map_err(FormError::from)?;
    let start_at = form.parse_start_at()?;

    get_customer(repo, customer_id)?;

    let new_reservation =
        NewReservation::try_new(customer_id, form.num_guests, start_at, form.notes())?;

    repo.create_reservation(&new_reservation)
        .map_err(|err| {
            error!("Failed to add a reservation for customer {customer_id}: {err}");
            ServiceError::from(err)
        })
}
