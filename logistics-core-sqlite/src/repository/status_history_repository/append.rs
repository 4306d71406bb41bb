use async_trait::async_trait;
use logistics_core_db::models::auditable::Auditable;
use logistics_core_db::models::identifiable::Identifiable;
use logistics_core_db::models::status_history::StatusHistoryModel;
use logistics_core_db::repository::append::Append;
use logistics_core_db::utils::format_timestamp;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::StatusHistoryRepositoryImpl;

impl StatusHistoryRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &StatusHistoryRepositoryImpl,
        item: &StatusHistoryModel,
    ) -> Result<StatusHistoryModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO status_history (id, package_id, status, timestamp)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.get_id().to_string())
        .bind(item.get_audited_id().to_string())
        .bind(item.status.as_str())
        .bind(format_timestamp(&item.get_effective_at()));

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item.clone())
    }
}

#[async_trait]
impl Append<Sqlite, StatusHistoryModel> for StatusHistoryRepositoryImpl {
    async fn append(&self, item: &StatusHistoryModel) -> Result<StatusHistoryModel, Box<dyn Error + Send + Sync>> {
        Self::append_impl(self, item).await
    }
}
