use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::auditable::Auditable;

/// Generic repository trait for loading the audit records of an entity
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The audit record type that must implement Auditable trait
///
/// # Example
/// ```ignore
/// let history = repo.load_audits(package_id).await?;
/// for entry in history {
///     println!("{} at {}", entry.status, entry.timestamp);
/// }
/// ```
#[async_trait]
pub trait LoadAudits<DB: Database, T: Auditable>: Send + Sync {
    /// Load all audit records for an entity, oldest first
    ///
    /// # Arguments
    /// * `id` - The UUID of the audited entity
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Records ordered by effective time, insertion order breaking ties.
    ///   Empty if the entity is unknown.
    /// * `Err` - An error if the query could not be executed
    async fn load_audits(&self, id: Uuid) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
