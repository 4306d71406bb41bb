use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating a single entity
///
/// The insert runs on the executor of the current unit of work, so it only
/// becomes visible once that unit of work commits.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Sqlite, PackageModel> for PackageRepositoryImpl {
///     async fn create(&self, item: &PackageModel) -> Result<PackageModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert an entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert, with its id already assigned
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: &T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
