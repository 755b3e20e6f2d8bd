use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, ReservationId, TypeConstraintError};

/// A table booking made by a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: Option<String>,
}

/// Payload for creating a reservation.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewReservation {
    pub customer_id: CustomerId,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: Option<String>,
}

impl NewReservation {
    /// Builds a reservation payload, rejecting parties of fewer than one guest.
    pub fn try_new(
        customer_id: CustomerId,
        num_guests: i32,
        start_at: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        if num_guests < 1 {
            return Err(TypeConstraintError::InvalidValue(format!(
                "a reservation needs at least one guest, got {num_guests}"
            )));
        }
        Ok(Self {
            customer_id,
            num_guests,
            start_at,
            notes,
        })
    }
}
