use logistics_core_db::models::status_history::StatusHistoryModel;
use crate::unit_of_work::Executor;
use crate::utils::{get_timestamp, get_uuid, TryFromRow};
use sqlx::{sqlite::SqliteRow, Row};
use std::error::Error;

/// Write-once access to `status_history`: rows can be appended and read, never changed.
pub struct StatusHistoryRepositoryImpl {
    pub executor: Executor,
}

impl StatusHistoryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<SqliteRow> for StatusHistoryModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(StatusHistoryModel {
            id: get_uuid(row, "id")?,
            package_id: get_uuid(row, "package_id")?,
            status: row.try_get("status")?,
            timestamp: get_timestamp(row, "timestamp")?,
        })
    }
}
