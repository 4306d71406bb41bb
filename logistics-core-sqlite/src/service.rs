use async_trait::async_trait;
use logistics_core_api::domain::{Package, StatusHistoryEntry};
use logistics_core_api::error::{ApiError, ApiResult};
use logistics_core_api::service::TrackingService;
use logistics_core_db::models::package::PackageModel;
use logistics_core_db::models::status_history::StatusHistoryModel;
use logistics_core_db::repository::{Append, Create, LoadAll, LoadAudits, UpdateStatus};
use logistics_core_db::utils::timestamp_now;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::repository::factory::{TrackingRepoFactory, TrackingRepositories};
use crate::sqlite_repositories::SqliteRepositories;
use crate::unit_of_work::UnitOfWork;

type BoxError = Box<dyn Error + Send + Sync>;

/// Outcome of the writes of one operation, decided before commit
enum WriteOutcome<T> {
    Commit(T),
    Reject(ApiError),
}

/// Tracking service storing packages and their history in SQLite.
///
/// Register and UpdateStatus run both of their writes inside one unit of
/// work. A failure of either write, or an update of an unknown package,
/// rolls the whole unit back.
#[derive(Debug, Clone)]
pub struct TrackingServiceImpl {
    repos: SqliteRepositories,
    factory: Arc<TrackingRepoFactory>,
}

impl TrackingServiceImpl {
    pub fn new(repos: SqliteRepositories, factory: Arc<TrackingRepoFactory>) -> Self {
        Self { repos, factory }
    }

    async fn begin(&self) -> ApiResult<(UnitOfWork, TrackingRepositories)> {
        let session = self.repos.begin_session().await.map_err(database_error)?;
        let repos = self.factory.build_all_repos(&session);
        Ok((session, repos))
    }

    /// Commit on success, roll back on anything else
    async fn finish<T>(
        session: UnitOfWork,
        result: Result<WriteOutcome<T>, BoxError>,
    ) -> ApiResult<T> {
        match result {
            Ok(WriteOutcome::Commit(value)) => {
                session.commit().await.map_err(boxed_database_error)?;
                Ok(value)
            }
            Ok(WriteOutcome::Reject(err)) => {
                session.rollback().await.map_err(boxed_database_error)?;
                Err(err)
            }
            Err(err) => {
                error!("Rolling back failed write: {err}");
                if let Err(rollback_err) = session.rollback().await {
                    error!("Rollback failed: {rollback_err}");
                }
                Err(boxed_database_error(err))
            }
        }
    }

    async fn register_writes(
        repos: &TrackingRepositories,
        package: &PackageModel,
    ) -> Result<WriteOutcome<PackageModel>, BoxError> {
        let saved = repos.package_repository.create(package).await?;
        repos
            .status_history_repository
            .append(&StatusHistoryModel::record(&saved))
            .await?;
        Ok(WriteOutcome::Commit(saved))
    }

    async fn update_writes(
        repos: &TrackingRepositories,
        id: Uuid,
        status: &str,
    ) -> Result<WriteOutcome<()>, BoxError> {
        let updated = repos
            .package_repository
            .update_status(id, status, timestamp_now())
            .await?;
        let Some(timestamp) = updated else {
            return Ok(WriteOutcome::Reject(ApiError::NotFound(format!("package {id}"))));
        };

        let entry = StatusHistoryModel {
            id: Uuid::new_v4(),
            package_id: id,
            status: status.to_string(),
            timestamp,
        };
        repos.status_history_repository.append(&entry).await?;
        Ok(WriteOutcome::Commit(()))
    }
}

#[async_trait]
impl TrackingService for TrackingServiceImpl {
    async fn register(&self, description: String) -> ApiResult<Package> {
        let package = PackageModel::new_registered(description);
        let (session, repos) = self.begin().await?;

        let result = Self::register_writes(&repos, &package).await;
        let saved = Self::finish(session, result).await?;

        info!(package_id = %saved.id, "Registered package");
        Ok(saved.into())
    }

    async fn update_status(&self, id: &str, status: String) -> ApiResult<()> {
        let Ok(id) = Uuid::parse_str(id) else {
            warn!(package_id = id, "Rejected status update for malformed package id");
            return Err(ApiError::NotFound(format!("package {id}")));
        };
        let (session, repos) = self.begin().await?;

        let result = Self::update_writes(&repos, id, &status).await;
        match Self::finish(session, result).await {
            Ok(()) => {
                info!(package_id = %id, status = %status, "Updated package status");
                Ok(())
            }
            Err(err @ ApiError::NotFound(_)) => {
                warn!(package_id = %id, "Rejected status update for unknown package");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn list_packages(&self) -> ApiResult<Vec<Package>> {
        let (session, repos) = self.begin().await?;
        let result = repos.package_repository.load_all().await;
        let packages = Self::finish(session, result.map(WriteOutcome::Commit)).await?;

        debug!(count = packages.len(), "Listed packages");
        Ok(packages.into_iter().map(Package::from).collect())
    }

    async fn get_history(&self, package_id: &str) -> ApiResult<Vec<StatusHistoryEntry>> {
        let Ok(id) = Uuid::parse_str(package_id) else {
            debug!(package_id, "History requested for malformed package id");
            return Ok(Vec::new());
        };
        let (session, repos) = self.begin().await?;
        let result = repos.status_history_repository.load_audits(id).await;
        let history = Self::finish(session, result.map(WriteOutcome::Commit)).await?;

        debug!(package_id = %id, count = history.len(), "Loaded package history");
        Ok(history.into_iter().map(StatusHistoryEntry::from).collect())
    }
}

fn database_error(err: sqlx::Error) -> ApiError {
    ApiError::DatabaseError(err.to_string())
}

fn boxed_database_error(err: BoxError) -> ApiError {
    ApiError::DatabaseError(err.to_string())
}
