//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter, ReservationReader, ReservationWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
        fn search_customers(&self, term: &str) -> RepositoryResult<Vec<Customer>>;
        fn list_best_customers(&self) -> RepositoryResult<Vec<Customer>>;
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn save_customer(&self, customer: &mut Customer) -> RepositoryResult<CustomerId>;
    }

    impl ReservationReader for Repository {
        fn list_reservations_for_customer(
            &self,
            customer_id: CustomerId,
        ) -> RepositoryResult<Vec<Reservation>>;
    }

    impl ReservationWriter for Repository {
        fn create_reservation(&self, reservation: &NewReservation) -> RepositoryResult<Reservation>;
    }
}
