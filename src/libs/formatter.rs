//! Due date parsing and timestamp formatting for the command line.
//!
//! Accepted due date inputs:
//!
//! - RFC 3339: `2025-03-01T17:00:00+01:00`
//! - Local date and time: `2025-03-01 17:00`
//! - Local date: `2025-03-01` (end of that day)
//! - Offset from now: `+2d`, `+3h`, `+45m`, `+1w`
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use todox::libs::formatter::parse_due;
//!
//! let now = Utc::now();
//! assert_eq!(parse_due("+2d", now).unwrap(), now + Duration::days(2));
//! ```

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a due date relative to `now`.
pub fn parse_due(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || msg_error_anyhow!(Message::InvalidDueDate(input.to_string()));

    if let Some(offset) = input.strip_prefix('+') {
        return parse_offset(offset)
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or_else(invalid);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| NaiveTime::from_hms_opt(23, 59, 59).map(|time| date.and_time(time)))
        })
        .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}

fn parse_offset(offset: &str) -> Option<Duration> {
    let unit = offset.chars().last()?;
    let amount: i64 = offset[..offset.len() - unit.len_utf8()].parse().ok()?;
    if amount < 0 {
        return None;
    }

    match unit {
        'm' => Duration::try_minutes(amount),
        'h' => Duration::try_hours(amount),
        'd' => Duration::try_days(amount),
        'w' => Duration::try_weeks(amount),
        _ => None,
    }
}

/// Formats a stored timestamp in local time.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}
