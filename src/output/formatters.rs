//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Display format for date columns, e.g. `Wed Jan 15 2025`.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

/// Format a timestamp for a date column.
///
/// Accepts RFC 3339 strings and Unix timestamps in milliseconds. Returns
/// `None` when the value is neither.
pub fn format_date(value: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(dt.with_timezone(&Utc).format(DATE_FORMAT).to_string());
    }

    let millis: i64 = value.trim().parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format(DATE_FORMAT).to_string())
}

/// Truncate string to max length (in characters) with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
