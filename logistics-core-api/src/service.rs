use async_trait::async_trait;

use crate::domain::{Package, StatusHistoryEntry};
use crate::error::ApiResult;

/// Tracking operations exposed to any transport.
///
/// Implementations must persist a package's state change and its history
/// entry as one atomic unit: either both are visible to later reads or neither is.
#[async_trait]
pub trait TrackingService: Send + Sync {
    /// Register a new package with status `"registered"`
    ///
    /// # Returns
    /// * `Ok(Package)` - The stored package with generated id and timestamp
    /// * `Err(ApiError::DatabaseError)` - If either write failed; nothing was persisted
    async fn register(&self, description: String) -> ApiResult<Package>;

    /// Set a new status on an existing package and append it to the history
    ///
    /// # Returns
    /// * `Ok(())` - Both the package and its history were updated
    /// * `Err(ApiError::NotFound)` - No package has this id; nothing was written
    /// * `Err(ApiError::DatabaseError)` - If either write failed; nothing was persisted
    async fn update_status(&self, id: &str, status: String) -> ApiResult<()>;

    /// List every package in storage order
    async fn list_packages(&self) -> ApiResult<Vec<Package>>;

    /// Load the history of a package, oldest entry first.
    ///
    /// Unknown ids yield an empty list.
    async fn get_history(&self, package_id: &str) -> ApiResult<Vec<StatusHistoryEntry>>;
}
