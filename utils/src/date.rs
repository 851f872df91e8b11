use chrono::{DateTime, Utc};

/// Drive reports timestamps as RFC 3339; the worksheet shows them in UTC without the offset.
pub fn format_drive_timestamp(timestamp: &str) -> Result<String, String> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|date| date.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string())
        .map_err(|e| format!("Invalid timestamp {}: {}", timestamp, e))
}
