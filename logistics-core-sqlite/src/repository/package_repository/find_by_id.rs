use async_trait::async_trait;
use logistics_core_db::models::package::PackageModel;
use logistics_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use sqlx::Sqlite;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PackageRepositoryImpl;

impl PackageRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &PackageRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<PackageModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT id, status, description, timestamp FROM packages WHERE id = $1"#;
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query)
                .bind(id.to_string())
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| PackageModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl FindById<Sqlite, PackageModel> for PackageRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PackageModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use logistics_core_db::repository::find_by_id::FindById;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_find_by_id_missing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let session = ctx.repos().begin_session().await?;
        let package_repo = ctx.factory().build_package_repo(&session);

        assert!(package_repo.find_by_id(Uuid::new_v4()).await?.is_none());

        Ok(())
    }
}
