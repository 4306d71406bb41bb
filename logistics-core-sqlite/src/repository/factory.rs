use std::sync::Arc;

use crate::unit_of_work::UnitOfWork;
use super::{PackageRepositoryImpl, StatusHistoryRepositoryImpl};

/// Factory for creating tracking repositories
///
/// Repositories built from the same session share its transaction. This
/// should be used as a singleton throughout the application.
#[derive(Debug, Default)]
pub struct TrackingRepoFactory {
    // Currently no caches needed for tracking repositories
}

impl TrackingRepoFactory {
    /// Create a new TrackingRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build a PackageRepository with the given session's executor
    pub fn build_package_repo(&self, session: &UnitOfWork) -> Arc<PackageRepositoryImpl> {
        Arc::new(PackageRepositoryImpl::new(session.executor().clone()))
    }

    /// Build a StatusHistoryRepository with the given session's executor
    pub fn build_status_history_repo(&self, session: &UnitOfWork) -> Arc<StatusHistoryRepositoryImpl> {
        Arc::new(StatusHistoryRepositoryImpl::new(session.executor().clone()))
    }

    /// Build all tracking repositories with the given session's executor
    pub fn build_all_repos(&self, session: &UnitOfWork) -> TrackingRepositories {
        TrackingRepositories {
            package_repository: self.build_package_repo(session),
            status_history_repository: self.build_status_history_repo(session),
        }
    }
}

/// Container for all tracking repositories of one session
pub struct TrackingRepositories {
    pub package_repository: Arc<PackageRepositoryImpl>,
    pub status_history_repository: Arc<StatusHistoryRepositoryImpl>,
}
