use log::error;
use validator::Validate;

use crate::domain::customer::Customer;
use crate::domain::reservation::Reservation;
use crate::domain::types::CustomerId;
use crate::dto::customers::CustomerPageData;
use crate::forms::FormError;
use crate::forms::customers::CustomerForm;
use crate::repository::{CustomerReader, CustomerWriter, ReservationReader};
use crate::services::{ServiceError, ServiceResult};

/// Lists customers matching `search`, or every customer when there is none.
///
/// The term is used verbatim, so an empty term matches everyone.
pub fn list_customers<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    match search {
        Some(term) => repo.search_customers(term),
        None => repo.list_customers(),
    }
    .map_err(ServiceError::from)
}

/// Returns the top customers by number of reservations.
pub fn list_best_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_best_customers().map_err(ServiceError::from)
}

/// Fetches a customer, failing with [`ServiceError::NotFound`] when absent.
pub fn get_customer<R>(repo: &R, id: CustomerId) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("No such customer: {id}")))
}

/// Upserts `customer`, adopting the generated id on first save.
pub fn save_customer<R>(repo: &R, customer: &mut Customer) -> ServiceResult<CustomerId>
where
    R: CustomerWriter + ?Sized,
{
    repo.save_customer(customer).map_err(ServiceError::from)
}

/// Reservations booked by `customer`; an unsaved customer has none.
pub fn get_reservations<R>(repo: &R, customer: &Customer) -> ServiceResult<Vec<Reservation>>
where
    R: ReservationReader + ?Sized,
{
    match customer.id {
        Some(id) => repo
            .list_reservations_for_customer(id)
            .map_err(ServiceError::from),
        None => Ok(Vec::new()),
    }
}

/// Loads the customer and their reservations for the details page.
pub fn load_customer_page<R>(repo: &R, id: CustomerId) -> ServiceResult<CustomerPageData>
where
    R: CustomerReader + ReservationReader + ?Sized,
{
    let customer = get_customer(repo, id)?;
    let reservations = get_reservations(repo, &customer)?;
    Ok(CustomerPageData {
        customer,
        reservations,
    })
}

/// Validates the add-customer form and persists a new customer.
pub fn add_customer<R>(repo: &R, form: &CustomerForm) -> ServiceResult<CustomerId>
where
    R: CustomerWriter + ?Sized,
{
    form.validate().map_err(FormError::from)?;

    let mut customer = form.to_customer();
    save_customer(repo, &mut customer).inspect_err(|err| {
        error!("Failed to add a customer: {err}");
    })
}

/// Validates the edit form and overwrites the stored customer.
pub fn update_customer<R>(repo: &R, id: CustomerId, form: &CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    form.validate().map_err(FormError::from)?;

    let mut customer = get_customer(repo, id)?;
    form.apply_to(&mut customer);
    save_customer(repo, &mut customer).inspect_err(|err| {
        error!("Failed to update customer {id}: {err}");
    })?;
    Ok(customer)
}
