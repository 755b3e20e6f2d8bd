use diesel::dsl::count;
use diesel::prelude::*;

use crate::db::unicode_lower;
use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BEST_CUSTOMERS_LIMIT, CustomerReader, CustomerWriter, DieselRepository};

fn into_domain(rows: Vec<DbCustomer>) -> RepositoryResult<Vec<Customer>> {
    rows.into_iter()
        .map(|row| Customer::try_from(row).map_err(Into::into))
        .collect()
}

impl CustomerReader for DieselRepository {
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .order((customers::last_name.asc(), customers::first_name.asc()))
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(rows)
    }

    fn search_customers(&self, term: &str) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let pattern = format!("%{}%", term.to_lowercase());

        // Both sides are lowercased in full; LIKE alone only folds ASCII.
        let rows = customers::table
            .filter(
                unicode_lower(
                    customers::first_name
                        .concat(" ")
                        .concat(customers::last_name),
                )
                .like(pattern),
            )
            .order((customers::last_name.asc(), customers::first_name.asc()))
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(rows)
    }

    fn list_best_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::{customers, reservations};

        let mut conn = self.conn()?;
        let rows = customers::table
            .inner_join(reservations::table)
            .group_by(customers::id)
            .order((
                count(reservations::id).desc(),
                customers::last_name.asc(),
                customers::first_name.asc(),
            ))
            .limit(BEST_CUSTOMERS_LIMIT)
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(rows)
    }

    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let row = customers::table
            .find(id.get())
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(row.map(Customer::try_from).transpose()?)
    }
}

impl CustomerWriter for DieselRepository {
    fn save_customer(&self, customer: &mut Customer) -> RepositoryResult<CustomerId> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        match customer.id {
            Some(id) => {
                let changes: DbUpdateCustomer = (&*customer).into();
                diesel::update(customers::table.find(id.get()))
                    .set(&changes)
                    .execute(&mut conn)?;
                Ok(id)
            }
            None => {
                let insertable: DbNewCustomer = (&*customer).into();
                let raw_id = diesel::insert_into(customers::table)
                    .values(&insertable)
                    .returning(customers::id)
                    .get_result::<i32>(&mut conn)?;
                let id = CustomerId::new(raw_id)?;
                customer.id = Some(id);
                Ok(id)
            }
        }
    }
}
