use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::Customer;
use crate::forms::non_blank;

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing a customer.
pub struct CustomerForm {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

impl CustomerForm {
    /// Prefills the form with the stored values of `customer`.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            notes: customer.notes.clone().unwrap_or_default(),
        }
    }

    /// Builds a customer that has not been saved yet.
    pub fn to_customer(&self) -> Customer {
        Customer::new(
            self.first_name.trim(),
            self.last_name.trim(),
            non_blank(&self.phone),
            non_blank(&self.notes),
        )
    }

    /// Overwrites the editable fields of `customer`, leaving its id alone.
    pub fn apply_to(&self, customer: &mut Customer) {
        customer.first_name = self.first_name.trim().to_string();
        customer.last_name = self.last_name.trim().to_string();
        customer.phone = non_blank(&self.phone);
        customer.notes = non_blank(&self.notes);
    }
}
