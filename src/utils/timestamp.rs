use chrono::{DateTime, Utc};

/// Wire format shared by both fixture documents: `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// RFC 3339 parse, accepting both `Z` and explicit UTC offsets.
/// Returns `None` on malformed input instead of erroring; callers treat
/// such values as unfilterable.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
