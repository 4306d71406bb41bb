use chrono::{DateTime, Utc};
use logistics_core_api::domain::StatusHistoryEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::models::package::PackageModel;

/// # Documentation
/// StatusHistory records one status a package held from `timestamp` on.
/// Rows are write-once: they are appended on registration and on every
/// status update, and never modified or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryModel {
    pub id: Uuid,

    /// Reference to the package this entry belongs to
    pub package_id: Uuid,

    pub status: String,

    pub timestamp: DateTime<Utc>,
}

impl StatusHistoryModel {
    /// Snapshot the current status of a package as a new history entry
    pub fn record(package: &PackageModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            package_id: package.id,
            status: package.status.clone(),
            timestamp: package.timestamp,
        }
    }
}

impl Identifiable for StatusHistoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for StatusHistoryModel {
    fn get_audited_id(&self) -> Uuid {
        self.package_id
    }

    fn get_effective_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl From<StatusHistoryModel> for StatusHistoryEntry {
    fn from(model: StatusHistoryModel) -> Self {
        StatusHistoryEntry {
            id: model.id,
            package_id: model.package_id,
            status: model.status,
            timestamp: model.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_package_state() {
        let package = PackageModel::new_registered("books".to_string());
        let entry = StatusHistoryModel::record(&package);

        assert_ne!(entry.id, package.id);
        assert_eq!(entry.package_id, package.id);
        assert_eq!(entry.status, package.status);
        assert_eq!(entry.timestamp, package.timestamp);
        assert_eq!(entry.get_audited_id(), package.get_id());
    }
}
