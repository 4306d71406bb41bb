pub mod repository;
pub mod service;
pub mod sqlite_repositories;
pub mod unit_of_work;
pub mod utils;

pub use repository::db_init::{connect, init_database};
pub use service::TrackingServiceImpl;
pub use sqlite_repositories::SqliteRepositories;
pub use unit_of_work::{Executor, UnitOfWork};

#[cfg(test)]
pub mod test_helper;
