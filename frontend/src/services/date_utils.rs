//! Date parsing and arithmetic helpers.
//!
//! Parsing is chrono-based and pure; only `today_string` touches the
//! browser clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Parse a date or datetime string to epoch milliseconds.
///
/// Accepts RFC 3339, a bare ISO datetime, or a bare `YYYY-MM-DD` (taken as
/// UTC midnight). Returns `None` for anything else; validators treat that
/// as a failed comparison.
pub fn parse_date_ms(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.timestamp_millis());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp_millis())
}

/// Date part of an RFC 3339 timestamp (everything before the 'T').
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Days from start to end, rounded up. Negative when end precedes start.
pub fn days_between(start_ms: i64, end_ms: i64) -> i64 {
    (((end_ms - start_ms) as f64) / MS_PER_DAY).ceil() as i64
}

/// Today's date as `YYYY-MM-DD` from the browser clock, for date input
/// defaults.
pub fn today_string() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
