//! Domain entities exposed by the Lunchly repository and service layers.

pub mod customer;
pub mod reservation;
pub mod types;
