use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for changing the status of a tracked entity in place
///
/// Only the status and the last-modified timestamp are written; every other
/// column is left untouched. The stored timestamp never moves backwards: a
/// writer that read the clock before a concurrent update committed gets the
/// newer stored timestamp instead of its own.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait UpdateStatus<DB: Database>: Send + Sync {
    /// Set `status` and `timestamp` on the entity with the given id
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to update
    /// * `status` - The new status label
    /// * `timestamp` - The time the new status became effective
    ///
    /// # Returns
    /// * `Ok(Some(DateTime))` - The entity existed and was updated; the timestamp actually stored
    /// * `Ok(None)` - No entity has this id, nothing was written
    /// * `Err` - An error if the update could not be executed
    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, Box<dyn std::error::Error + Send + Sync>>;
}
