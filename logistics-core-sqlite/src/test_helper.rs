//! Test helper module for database-per-test isolation
//!
//! Every context gets its own SQLite file inside a temporary directory that
//! is removed when the context is dropped, so tests never observe each
//! other's rows and need no cleanup.

use crate::repository::db_init::{connect, init_database};
use crate::repository::factory::TrackingRepoFactory;
use crate::service::TrackingServiceImpl;
use crate::sqlite_repositories::SqliteRepositories;
use std::sync::Arc;
use tempfile::TempDir;

/// Test context holding a freshly initialized database
pub struct TestContext {
    repos: SqliteRepositories,
    factory: Arc<TrackingRepoFactory>,
    _dir: TempDir,
}

impl TestContext {
    pub fn repos(&self) -> &SqliteRepositories {
        &self.repos
    }

    pub fn factory(&self) -> &TrackingRepoFactory {
        &self.factory
    }

    /// Build a tracking service on top of this context's database
    pub fn service(&self) -> TrackingServiceImpl {
        TrackingServiceImpl::new(self.repos.clone(), self.factory.clone())
    }

    /// Make every insert into `status_history` with the given status fail.
    ///
    /// Simulates a storage failure between the package write and the
    /// history append of a single operation.
    pub async fn fail_history_appends_for(
        &self,
        status: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!(
            r#"
            CREATE TRIGGER IF NOT EXISTS fail_history_append
            BEFORE INSERT ON status_history
            WHEN NEW.status = '{}'
            BEGIN
                SELECT RAISE(ABORT, 'injected history failure');
            END;
            "#,
            status.replace('\'', "''")
        );
        sqlx::raw_sql(&sql).execute(self.repos.pool()).await?;
        Ok(())
    }

    /// Make every insert into `packages` fail
    pub async fn fail_package_inserts(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::raw_sql(
            r#"
            CREATE TRIGGER IF NOT EXISTS fail_package_insert
            BEFORE INSERT ON packages
            BEGIN
                SELECT RAISE(ABORT, 'injected package failure');
            END;
            "#,
        )
        .execute(self.repos.pool())
        .await?;
        Ok(())
    }

    /// Number of rows in `status_history`, across all packages
    pub async fn count_history_rows(&self) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM status_history")
            .fetch_one(self.repos.pool())
            .await?;
        Ok(count)
    }
}

/// Setup a test context backed by a new SQLite database
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let session = ctx.repos().begin_session().await?;
///     let package_repo = ctx.factory().build_package_repo(&session);
///
///     // Perform test operations...
///
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    setup_test_context_with_connections(1).await
}

/// Setup a test context whose pool allows several concurrent connections
pub async fn setup_test_context_with_connections(
    max_connections: u32,
) -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let dir = tempfile::tempdir()?;
    let database_url = format!("sqlite://{}", dir.path().join("logistics.db").display());

    let pool = connect(&database_url, max_connections).await?;
    init_database(&pool).await?;

    Ok(TestContext {
        repos: SqliteRepositories::new(Arc::new(pool)),
        factory: TrackingRepoFactory::new(),
        _dir: dir,
    })
}
