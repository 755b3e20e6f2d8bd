//! Database models shared across the Lunchly repository.

pub mod config;
pub mod customer;
pub mod reservation;
