use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::{CustomerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Full overwrite of the mutable customer columns; `None` clears a column.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(row: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(CustomerId::new(row.id)?),
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            notes: row.notes,
        })
    }
}

impl<'a> From<&'a DomainCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            phone: customer.phone.as_deref(),
            notes: customer.notes.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            phone: customer.phone.as_deref(),
            notes: customer.notes.as_deref(),
        }
    }
}
