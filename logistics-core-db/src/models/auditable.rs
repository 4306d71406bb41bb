use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::identifiable::Identifiable;

/// Trait for write-once records that document a change of another entity
pub trait Auditable: Identifiable {
    /// Returns the ID of the entity this record belongs to
    fn get_audited_id(&self) -> Uuid;

    /// Returns the time at which the recorded change became effective
    fn get_effective_at(&self) -> DateTime<Utc>;
}
