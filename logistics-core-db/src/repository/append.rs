use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Auditable;

/// Generic repository trait for appending to a write-once audit table
///
/// Audit tables only grow; this trait has no update or delete counterpart.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The audit record type that must implement Auditable trait
#[async_trait]
pub trait Append<DB: Database, T: Auditable>: Send + Sync {
    /// Append one audit record
    ///
    /// # Returns
    /// * `Ok(T)` - The stored record
    /// * `Err` - An error if the insert could not be executed, including a
    ///   missing audited entity
    async fn append(&self, item: &T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
