//! Date conversions used by date columns.
//!
//! Stored values are timestamps in one of the accepted text forms; the
//! date editor works on calendar dates (`YYYY-MM-DD`). Committed values are
//! always canonical RFC 3339 UTC timestamps with millisecond precision.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Calendar date format used by the date editor.
pub const CALENDAR_FORMAT: &str = "%Y-%m-%d";

/// Canonical timestamp format for committed values.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a stored value into a UTC date-time.
///
/// Accepts RFC 3339 (any offset, converted to UTC), offset-less
/// date-times, and bare calendar dates (midnight).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, CALENDAR_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Convert a stored value to the editor's `YYYY-MM-DD` form.
pub fn to_calendar_date(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(CALENDAR_FORMAT).to_string())
}

/// Convert an edited calendar date to a canonical timestamp.
///
/// Returns `None` when `date` is not a valid `YYYY-MM-DD` date.
pub fn to_timestamp(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), CALENDAR_FORMAT)
        .ok()
        .map(|date| format_canonical(date.and_time(NaiveTime::MIN)))
}

/// Rewrite any accepted stored value in canonical timestamp form.
pub fn normalize_timestamp(value: &str) -> Option<String> {
    parse_timestamp(value).map(format_canonical)
}

/// Format a stored value with a strftime pattern.
///
/// `None` when the value does not parse or the pattern is invalid.
pub fn format_with(value: &str, pattern: &str) -> Option<String> {
    let dt = parse_timestamp(value)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

fn format_canonical(dt: NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}
