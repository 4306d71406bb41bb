use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status every package carries right after registration
pub const REGISTERED_STATUS: &str = "registered";

/// # Documentation
/// A tracked shipment with its current status.
/// - `id` is generated by the service at registration, never client supplied.
/// - `status` is an opaque label; any string is accepted.
/// - `description` is set once at registration.
/// - `timestamp` is the time of the last status change and always equals the
///   timestamp of the latest history entry for this package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub status: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// One immutable record of a status value effective at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: Uuid,
    pub package_id: Uuid,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of a registration request. A missing description registers an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub description: String,
}

/// Body of a status update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
}

/// JSON body carried by every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
