use chrono::{DateTime, Utc};
use logistics_core_api::domain::{Package, REGISTERED_STATUS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::timestamp_now;

/// # Documentation
/// Current state of a tracked package, one row per package in `packages`.
/// - Created on registration, mutated only through status updates.
/// - `timestamp` mirrors the timestamp of the newest `StatusHistoryModel` of this package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageModel {
    pub id: Uuid,

    /// Opaque status label, any string is accepted
    pub status: String,

    /// Free-form description, immutable after registration
    pub description: String,

    /// Time of the last status change
    pub timestamp: DateTime<Utc>,
}

impl PackageModel {
    /// Build a freshly registered package with a generated id and the current time
    pub fn new_registered(description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: REGISTERED_STATUS.to_string(),
            description,
            timestamp: timestamp_now(),
        }
    }
}

impl Identifiable for PackageModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<PackageModel> for Package {
    fn from(model: PackageModel) -> Self {
        Package {
            id: model.id,
            status: model.status,
            description: model.description,
            timestamp: model.timestamp,
        }
    }
}
