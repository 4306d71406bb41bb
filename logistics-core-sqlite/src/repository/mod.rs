pub mod db_init;
pub mod factory;
pub mod package_repository;
pub mod status_history_repository;

pub use factory::{TrackingRepoFactory, TrackingRepositories};
pub use package_repository::PackageRepositoryImpl;
pub use status_history_repository::StatusHistoryRepositoryImpl;
