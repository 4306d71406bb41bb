use sqlx::SqlitePool;
use std::sync::Arc;

use crate::unit_of_work::UnitOfWork;

/// Entry point to the SQLite store: owns the pool and hands out sessions
#[derive(Debug, Clone)]
pub struct SqliteRepositories {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositories {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a unit of work; repositories built for it share one transaction
    pub async fn begin_session(&self) -> Result<UnitOfWork, sqlx::Error> {
        UnitOfWork::begin(&self.pool).await
    }
}
