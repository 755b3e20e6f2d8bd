//! SQLite connection pool used by the repository layer.
//!
//! The pool is created once at startup and handed to
//! [`crate::repository::DieselRepository`]; nothing in the crate reaches for a
//! global connection.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    /// Unicode-aware lowercasing. SQLite's built-in `lower` only folds ASCII.
    ///
    /// Registered on every pooled connection by [`SqlitePragmas`].
    fn unicode_lower(text: Text) -> Text;
}

/// Install the Rust-side functions the repository queries rely on.
pub fn register_sql_functions(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |text: String| text.to_lowercase())
}

/// Pragmas applied every time a connection is handed out by the pool.
#[derive(Debug, Clone, Copy)]
pub struct SqlitePragmas {
    /// Write-ahead logging, so readers do not block the single writer.
    pub journal_wal: bool,
    /// `reservations.customer_id` references `customers.id`.
    pub foreign_keys: bool,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Option<Duration>,
}

impl Default for SqlitePragmas {
    fn default() -> Self {
        Self {
            journal_wal: true,
            foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl SqlitePragmas {
    fn to_sql(self) -> String {
        let mut sql = String::new();
        if self.journal_wal {
            sql.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if self.foreign_keys {
            sql.push_str("PRAGMA foreign_keys = ON;");
        }
        if let Some(timeout) = self.busy_timeout {
            sql.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        sql
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        register_sql_functions(conn).map_err(diesel::r2d2::Error::QueryError)?;

        let sql = self.to_sql();
        if sql.is_empty() {
            return Ok(());
        }
        conn.batch_execute(&sql)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for `database_url` with the default pragmas.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_connection_pool_with(database_url, SqlitePragmas::default())
}

/// Create a connection pool for `database_url` applying `pragmas` on acquire.
pub fn establish_connection_pool_with(
    database_url: &str,
    pragmas: SqlitePragmas,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(pragmas))
        .build(manager)
}

/// Retrieve a connection from the pool, logging the failure if there is one.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}
