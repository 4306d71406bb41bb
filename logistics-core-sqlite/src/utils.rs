use chrono::{DateTime, Utc};
use logistics_core_db::utils::parse_timestamp;
use sqlx::{sqlite::SqliteRow, Row};
use std::error::Error;
use uuid::Uuid;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required UUID stored as hyphenated text.
pub fn get_uuid(row: &SqliteRow, col_name: &str) -> Result<Uuid, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    Uuid::parse_str(&s)
        .map_err(|e| format!("Value for column '{col_name}' is not a UUID: {e}").into())
}

/// Retrieves a required RFC3339 timestamp stored as text.
pub fn get_timestamp(
    row: &SqliteRow,
    col_name: &str,
) -> Result<DateTime<Utc>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    parse_timestamp(&s).map_err(|e| format!("Column '{col_name}': {e}").into())
}
