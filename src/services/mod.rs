//! Request-independent orchestration between forms, domain and repositories.

pub mod customers;
pub mod errors;
pub mod reservations;

pub use errors::{ServiceError, ServiceResult};
