use diesel::prelude::*;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::CustomerId;
use crate::models::reservation::{
    NewReservation as DbNewReservation, Reservation as DbReservation,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReservationReader, ReservationWriter};

impl ReservationReader for DieselRepository {
    fn list_reservations_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Reservation>> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;
        let rows = reservations::table
            .filter(reservations::customer_id.eq(customer_id.get()))
            .order((reservations::start_at.asc(), reservations::id.asc()))
            .select(DbReservation::as_select())
            .load::<DbReservation>(&mut conn)?;

        rows.into_iter()
            .map(|row| Reservation::try_from(row).map_err(Into::into))
            .collect()
    }
}

impl ReservationWriter for DieselRepository {
    fn create_reservation(&self, reservation: &NewReservation) -> RepositoryResult<Reservation> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;
        let insertable: DbNewReservation = reservation.into();

        let row = diesel::insert_into(reservations::table)
            .values(&insertable)
            .returning(DbReservation::as_returning())
            .get_result::<DbReservation>(&mut conn)?;

        Ok(Reservation::try_from(row)?)
    }
}
