//! Storage traits for customers and reservations and their Diesel backend.
//!
//! Every trait method is a single round-trip to the database. Callers receive
//! store failures as [`errors::RepositoryError`] without any retry.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::customer::Customer;
use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod reservation;

/// Maximum number of customers returned by [`CustomerReader::list_best_customers`].
pub const BEST_CUSTOMERS_LIMIT: i64 = 10;

pub trait CustomerReader {
    /// All customers ordered by last name, then first name.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    /// Customers whose "first last" name contains `term`, ignoring case.
    fn search_customers(&self, term: &str) -> RepositoryResult<Vec<Customer>>;
    /// Customers with the most reservations, busiest first.
    fn list_best_customers(&self) -> RepositoryResult<Vec<Customer>>;
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
}

pub trait CustomerWriter {
    /// Inserts `customer` when it has no id, otherwise overwrites its row.
    ///
    /// On insert the generated id is written back into `customer`.
    fn save_customer(&self, customer: &mut Customer) -> RepositoryResult<CustomerId>;
}

pub trait ReservationReader {
    fn list_reservations_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Reservation>>;
}

pub trait ReservationWriter {
    fn create_reservation(&self, reservation: &NewReservation) -> RepositoryResult<Reservation>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
