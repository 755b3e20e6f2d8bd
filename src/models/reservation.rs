//! Diesel models for stored reservations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation,
};
use crate::domain::types::{CustomerId, ReservationId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reservations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Reservation {
    pub id: i32,
    pub customer_id: i32,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation<'a> {
    pub customer_id: i32,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: Option<&'a str>,
}

impl TryFrom<Reservation> for DomainReservation {
    type Error = TypeConstraintError;

    fn try_from(row: Reservation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReservationId::new(row.id)?,
            customer_id: CustomerId::new(row.customer_id)?,
            num_guests: row.num_guests,
            start_at: row.start_at,
            notes: row.notes,
        })
    }
}

impl<'a> From<&'a DomainNewReservation> for NewReservation<'a> {
    fn from(reservation: &'a DomainNewReservation) -> Self {
        Self {
            customer_id: reservation.customer_id.get(),
            num_guests: reservation.num_guests,
            start_at: reservation.start_at,
            notes: reservation.notes.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn reservation_row_into_domain() {
        let now = Utc::now().naive_utc();
        let row = Reservation {
            id: 9,
            customer_id: 2,
            num_guests: 4,
            start_at: now,
            notes: None,
        };
        let reservation = DomainReservation::try_from(row).unwrap();
        assert_eq!(reservation.id.get(), 9);
        assert_eq!(reservation.customer_id.get(), 2);
        assert_eq!(reservation.start_at, now);
    }

    #[test]
    fn reservation_row_with_bad_customer_is_rejected() {
        let row = Reservation {
            id: 1,
            customer_id: -1,
            num_guests: 2,
            start_at: Utc::now().naive_utc(),
            notes: None,
        };
        assert!(DomainReservation::try_from(row).is_err());
    }
}
