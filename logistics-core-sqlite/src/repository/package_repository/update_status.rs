use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logistics_core_db::repository::update_status::UpdateStatus;
use logistics_core_db::utils::format_timestamp;
use crate::utils::get_timestamp;
use sqlx::Sqlite;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PackageRepositoryImpl;

impl PackageRepositoryImpl {
    pub(super) async fn update_status_impl(
        repo: &PackageRepositoryImpl,
        id: Uuid,
        status: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, Box<dyn Error + Send + Sync>> {
        // Description is immutable after registration. Timestamps are fixed-width
        // text, so MAX keeps the later of the stored and the proposed value.
        let query = sqlx::query(
            r#"
            UPDATE packages SET
                status = $2,
                timestamp = MAX($3, timestamp)
            WHERE id = $1
            RETURNING timestamp
            "#,
        )
        .bind(id.to_string())
        .bind(status)
        .bind(format_timestamp(&timestamp));

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| get_timestamp(&row, "timestamp")).transpose()
    }
}

#[async_trait]
impl UpdateStatus<Sqlite> for PackageRepositoryImpl {
    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, Box<dyn Error + Send + Sync>> {
        Self::update_status_impl(self, id, status, timestamp).await
    }
}
