use async_trait::async_trait;
use logistics_core_db::models::package::PackageModel;
use logistics_core_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::PackageRepositoryImpl;

impl PackageRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &PackageRepositoryImpl,
    ) -> Result<Vec<PackageModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT id, status, description, timestamp FROM packages"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).fetch_all(&mut **transaction).await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(PackageModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl LoadAll<Sqlite, PackageModel> for PackageRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<PackageModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
