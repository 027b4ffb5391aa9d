//! Display formatting for entity fields.

use chrono::{DateTime, Local};

/// Local date/time layout, e.g. `11/14/2023, 10:13:20 PM`
pub const DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Shown when a timestamp cannot be interpreted
pub const INVALID_DATE: &str = "Invalid Date";

/// Price with a currency prefix. Whole amounts print without decimals.
pub fn price(value: f64) -> String {
    format!("${}", value)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Whole milliseconds for a seconds timestamp, `None` when it is not finite
pub fn epoch_seconds_to_millis(seconds: f64) -> Option<i64> {
    let millis = (seconds * 1000.0).round();
    millis.is_finite().then_some(millis as i64)
}

/// Local date/time for a seconds Unix timestamp
pub fn local_datetime_from_seconds(seconds: f64) -> String {
    epoch_seconds_to_millis(seconds)
        .map(local_datetime_from_millis)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Local date/time for a millisecond Unix timestamp
pub fn local_datetime_from_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Local date/time for an RFC 3339 timestamp
pub fn local_datetime_from_rfc3339(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Local).format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|_| INVALID_DATE.to_string())
}
