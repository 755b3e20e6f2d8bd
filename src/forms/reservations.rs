use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::forms::{FormError, non_blank};

/// Formats accepted for the reservation start time; the first one is what an
/// HTML `datetime-local` input submits.
const START_AT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Deserialize, Validate)]
/// Form data for booking a table for a customer.
pub struct ReservationForm {
    #[validate(range(min = 1, max = 100))]
    pub num_guests: i32,
    pub start_at: String,
    #[serde(default)]
    pub notes: String,
}

impl ReservationForm {
    pub fn parse_start_at(&self) -> Result<NaiveDateTime, FormError> {
        let raw = self.start_at.trim();
        START_AT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .ok_or_else(|| FormError::InvalidStartAt(raw.to_string()))
    }

    pub fn notes(&self) -> Option<String> {
        non_blank(&self.notes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn form(num_guests: i32, start_at: &str) -> ReservationForm {
        ReservationForm {
            num_guests,
            start_at: start_at.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn parses_datetime_local_input() {
        let parsed = form(2, "2025-06-01T18:45").parse_start_at().unwrap();
        assert_eq!(parsed.month(), 6);
        assert_eq!(parsed.hour(), 18);
        assert_eq!(parsed.minute(), 45);
    }

    #[test]
    fn rejects_garbage_start_time() {
        assert!(matches!(
            form(2, "tomorrow").parse_start_at(),
            Err(FormError::InvalidStartAt(_))
        ));
    }

    #[test]
    fn guest_count_is_validated() {
        assert!(form(0, "2025-06-01T18:45").validate().is_err());
        assert!(form(4, "2025-06-01T18:45").validate().is_ok());
        assert_eq!(form(4, "x").notes(), None);
    }
}
