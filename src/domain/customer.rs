use serde::{Deserialize, Serialize};

use crate::domain::types::CustomerId;

/// A restaurant patron.
///
/// `id` is `None` until the customer has been saved; after that it holds the
/// identifier generated by the store and is never reassigned.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl Customer {
    /// Builds a customer that has not been persisted yet.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone,
            notes,
        }
    }

    /// First and last name separated by a single space.
    ///
    /// Computed on every call so it always reflects the current name fields.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the store has assigned an identifier to this customer.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
