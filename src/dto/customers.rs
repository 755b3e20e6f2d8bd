//! Customer shapes handed to templates and the JSON API.

use serde::Serialize;

use crate::domain::customer::Customer;
use crate::domain::reservation::Reservation;
use crate::domain::types::{CustomerId, ReservationId};

/// Customers produced by the search middleware for the current request.
#[derive(Debug, Clone, Default)]
pub struct CustomerListing {
    pub customers: Vec<Customer>,
    /// The `search` query parameter, when the request carried one.
    pub search: Option<String>,
}

/// Flattened customer with the derived full name precomputed for templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerView {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            full_name: customer.full_name(),
            phone: customer.phone.clone(),
            notes: customer.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReservationView {
    pub id: ReservationId,
    pub num_guests: i32,
    /// Human readable start time, e.g. `March 14 2025, 7:30 PM`.
    pub start_at: String,
    pub notes: Option<String>,
}

impl From<&Reservation> for ReservationView {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            num_guests: reservation.num_guests,
            start_at: reservation.start_at.format("%B %-d %Y, %-I:%M %p").to_string(),
            notes: reservation.notes.clone(),
        }
    }
}

/// Aggregated data required to render the customer details page.
#[derive(Debug)]
pub struct CustomerPageData {
    pub customer: Customer,
    pub reservations: Vec<Reservation>,
}

pub fn customer_views(customers: &[Customer]) -> Vec<CustomerView> {
    customers.iter().map(CustomerView::from).collect()
}
