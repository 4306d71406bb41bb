use logistics_core_db::models::package::PackageModel;
use crate::unit_of_work::Executor;
use crate::utils::{get_timestamp, get_uuid, TryFromRow};
use sqlx::{sqlite::SqliteRow, Row};
use std::error::Error;

pub struct PackageRepositoryImpl {
    pub executor: Executor,
}

impl PackageRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<SqliteRow> for PackageModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PackageModel {
            id: get_uuid(row, "id")?,
            status: row.try_get("status")?,
            description: row.try_get("description")?,
            timestamp: get_timestamp(row, "timestamp")?,
        })
    }
}
