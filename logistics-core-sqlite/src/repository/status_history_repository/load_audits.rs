use async_trait::async_trait;
use logistics_core_db::models::status_history::StatusHistoryModel;
use logistics_core_db::repository::load_audits::LoadAudits;
use crate::utils::TryFromRow;
use sqlx::Sqlite;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::StatusHistoryRepositoryImpl;

impl StatusHistoryRepositoryImpl {
    pub(super) async fn load_audits_impl(
        repo: &StatusHistoryRepositoryImpl,
        id: Uuid,
    ) -> Result<Vec<StatusHistoryModel>, Box<dyn Error + Send + Sync>> {
        // Fixed-width timestamps sort chronologically; rowid keeps insertion order on ties
        let query = r#"
            SELECT id, package_id, status, timestamp FROM status_history
            WHERE package_id = $1
            ORDER BY timestamp ASC, rowid ASC
        "#;

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query)
                .bind(id.to_string())
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(StatusHistoryModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl LoadAudits<Sqlite, StatusHistoryModel> for StatusHistoryRepositoryImpl {
    async fn load_audits(&self, id: Uuid) -> Result<Vec<StatusHistoryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_audits_impl(self, id).await
    }
}
