use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to the precision timestamps are persisted with.
///
/// Values handed back to callers must compare equal to what is later read
/// from storage, so anything finer than microseconds is dropped up front.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Formats a timestamp as RFC3339 with a fixed six-digit fraction and a `Z` suffix.
///
/// The fixed width keeps lexicographic order equal to chronological order.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses any RFC3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid RFC3339 timestamp '{value}': {e}"))
}
