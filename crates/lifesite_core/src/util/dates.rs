//! Timestamp parsing and display formatting.
//!
//! Snapshots mix RFC 3339 stamps, naive `YYYY-MM-DD HH:MM:SS` stamps and bare
//! dates. Offsets are kept as wall-clock time; nothing is shifted to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses any supported timestamp shape. Bare dates resolve to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses the calendar date part of a timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    // `2025-08-03T10:00:00` and friends: take the leading date.
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Parses a `"August 2025"` month label to its first day.
pub fn parse_month_label(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", raw.trim()), "%d %B %Y").ok()
}

/// `Aug 3, 2025, 14:05:09`. Unparseable input is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.format("%b %-d, %Y, %H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}

/// `8/3/2025`. Unparseable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    format_date_with(raw, "%-m/%-d/%Y")
}

/// `August 3, 2025`.
pub fn format_long_date(raw: &str) -> String {
    format_date_with(raw, "%B %-d, %Y")
}

/// `Sunday, Aug 3`.
pub fn format_weekday_date(raw: &str) -> String {
    format_date_with(raw, "%A, %b %-d")
}

fn format_date_with(raw: &str, format: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.date().format(format).to_string(),
        None => raw.to_string(),
    }
}

/// Last representable instant of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}
