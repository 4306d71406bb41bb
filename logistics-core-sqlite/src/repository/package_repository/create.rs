use async_trait::async_trait;
use logistics_core_db::models::package::PackageModel;
use logistics_core_db::repository::create::Create;
use logistics_core_db::utils::format_timestamp;
use sqlx::Sqlite;
use std::error::Error;

use super::repo_impl::PackageRepositoryImpl;

impl PackageRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &PackageRepositoryImpl,
        item: &PackageModel,
    ) -> Result<PackageModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO packages (id, status, description, timestamp)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id.to_string())
        .bind(item.status.as_str())
        .bind(item.description.as_str())
        .bind(format_timestamp(&item.timestamp));

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item.clone())
    }
}

#[async_trait]
impl Create<Sqlite, PackageModel> for PackageRepositoryImpl {
    async fn create(&self, item: &PackageModel) -> Result<PackageModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::package_repository::test_utils::create_test_package;
    use crate::test_helper::setup_test_context;
    use logistics_core_db::repository::create::Create;
    use logistics_core_db::repository::find_by_id::FindById;

    #[tokio::test]
    async fn test_create() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let session = ctx.repos().begin_session().await?;
        let package_repo = ctx.factory().build_package_repo(&session);

        let package = create_test_package("books");
        let saved = package_repo.create(&package).await?;
        assert_eq!(saved, package);

        let loaded = package_repo.find_by_id(package.id).await?;
        assert_eq!(loaded, Some(package));

        session.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let session = ctx.repos().begin_session().await?;
        let package_repo = ctx.factory().build_package_repo(&session);

        let package = create_test_package("books");
        package_repo.create(&package).await?;
        assert!(package_repo.create(&package).await.is_err());

        Ok(())
    }
}
