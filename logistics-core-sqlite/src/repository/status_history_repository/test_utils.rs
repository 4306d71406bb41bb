use chrono::{DateTime, Utc};
use logistics_core_db::models::status_history::StatusHistoryModel;
use uuid::Uuid;

pub fn create_test_history_entry(
    package_id: Uuid,
    status: &str,
    timestamp: DateTime<Utc>,
) -> StatusHistoryModel {
    StatusHistoryModel {
        id: Uuid::new_v4(),
        package_id,
        status: status.to_string(),
        timestamp,
    }
}
