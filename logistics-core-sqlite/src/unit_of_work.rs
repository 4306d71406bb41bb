//! Transaction sharing between repositories
//!
//! A [`UnitOfWork`] owns one SQLite transaction. Every repository built for
//! the session receives a clone of its [`Executor`] and runs its statements
//! on that transaction, so all writes of one service operation commit or
//! roll back together.

use sqlx::{Sqlite, SqlitePool, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SqliteTransaction = Transaction<'static, Sqlite>;

/// Shared handle on the transaction of a unit of work.
///
/// The transaction is taken out on commit or rollback; repositories using a
/// consumed executor get a "Transaction has been consumed" error.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<SqliteTransaction>>>,
}

impl Executor {
    pub fn new(tx: SqliteTransaction) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

/// One database transaction shared by all repositories built for it
#[derive(Debug)]
pub struct UnitOfWork {
    executor: Executor,
}

impl UnitOfWork {
    /// Begin a new transaction on the pool
    pub async fn begin(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Self {
            executor: Executor::new(tx),
        })
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Commit every statement executed through this session
    pub async fn commit(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    /// Discard every statement executed through this session
    pub async fn rollback(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        Ok(())
    }
}
