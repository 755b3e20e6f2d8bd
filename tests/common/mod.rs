//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use lunchly::db::{DbPool, establish_connection_pool};
use lunchly::domain::customer::Customer;
use lunchly::domain::reservation::NewReservation;
use lunchly::domain::types::CustomerId;
use lunchly::repository::{CustomerWriter, DieselRepository, ReservationWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database living in a temporary directory, migrated on creation
/// and removed when dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let db = Self::empty(name);
        let mut conn = db.pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        drop(conn);
        db
    }

    /// A database file without any tables.
    pub fn empty(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("Temp path is not valid UTF-8");
        let pool = establish_connection_pool(url).expect("Failed to create pool");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn add_customer(repo: &DieselRepository, first: &str, last: &str) -> Customer {
    let mut customer = Customer::new(first, last, None, None);
    repo.save_customer(&mut customer)
        .expect("Failed to save customer");
    customer
}

pub fn add_reservations(repo: &DieselRepository, customer: &Customer, count: usize) {
    let customer_id: CustomerId = customer.id.expect("Customer must be saved first");
    for day in 0..count {
        let reservation =
            NewReservation::try_new(customer_id, 2, start_at(day as u32 + 1), None).unwrap();
        repo.create_reservation(&reservation)
            .expect("Failed to save reservation");
    }
}

pub fn start_at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap()
}
