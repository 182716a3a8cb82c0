//! Relative "last updated" labels.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::domain::Millis;

const MINUTE: Millis = 60 * 1000;
const HOUR: Millis = 60 * MINUTE;
const DAY: Millis = 24 * HOUR;
const WEEK: Millis = 7 * DAY;

/// Formats `timestamp` relative to `now`, using the local time zone for
/// dates older than a week.
pub fn format_relative(timestamp: Millis, now: Millis) -> String {
    format_relative_in(timestamp, now, &Local)
}

/// Formats `timestamp` relative to `now`.
///
/// Every bucket truncates toward zero: 119 seconds is "1m ago". Timestamps in
/// the future read as "Just now". Extreme values never overflow; they land in
/// the absolute-date bucket or "Just now".
pub fn format_relative_in<Tz>(timestamp: Millis, now: Millis, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let elapsed = now.saturating_sub(timestamp);
    if elapsed < MINUTE {
        "Just now".to_string()
    } else if elapsed < HOUR {
        format!("{}m ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}h ago", elapsed / HOUR)
    } else if elapsed < WEEK {
        format!("{}d ago", elapsed / DAY)
    } else {
        format_date_in(timestamp, tz)
    }
}

/// Absolute date, e.g. "Mar 5, 2024".
pub fn format_date(timestamp: Millis) -> String {
    format_date_in(timestamp, &Local)
}

fn format_date_in<Tz>(timestamp: Millis, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp_millis(timestamp)
        .map(|dt| dt.with_timezone(tz).format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
