//! Database connection and schema initialization
//!
//! The schema lives in the `migrations` directory of this crate and is
//! embedded at compile time. Every statement is `CREATE ... IF NOT EXISTS`,
//! so initialization is safe to run on every startup, including against a
//! database file that already holds both tables.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for the SQLite write lock before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a connection pool on the given SQLite URL
///
/// The database file is created when missing. Foreign keys are enforced and
/// the WAL journal lets readers proceed while a writer holds the lock.
///
/// # Example
///
/// ```rust,no_run
/// use logistics_core_sqlite::repository::db_init::{connect, init_database};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = connect("sqlite://logistics.db", 5).await?;
/// init_database(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Create the `packages` and `status_history` tables if they are absent
pub async fn init_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Database schema initialized");
    Ok(())
}
