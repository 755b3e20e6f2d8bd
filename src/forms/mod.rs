//! Form definitions backing the Lunchly routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod customers;
pub mod reservations;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid start time: {0}")]
    InvalidStartAt(String),
}

/// Trims `value` and turns blank input into `None`.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
