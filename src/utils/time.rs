//! Time utilities: parsing HH:MM, ISO-8601 timestamps for rows.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime, SecondsFormat, Timelike, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse "HH:MM" into (hour, minute).
pub fn parse_clock(t: &str) -> AppResult<(i32, i32)> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok((time.hour() as i32, time.minute() as i32))
}

pub fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current instant as a sortable ISO-8601 UTC string.
pub fn now_iso() -> String {
    iso(Utc::now())
}

/// A timestamp for "now" that sorts strictly after `prev`.
///
/// Two saves inside the same microsecond (or a clock step backwards)
/// would otherwise produce a non-increasing `updated_at`.
pub fn stamp_after(prev: &str) -> String {
    let now = Utc::now();
    match DateTime::parse_from_rfc3339(prev) {
        Ok(p) => {
            let p = p.with_timezone(&Utc);
            if now > p {
                iso(now)
            } else {
                iso(p + Duration::microseconds(1))
            }
        }
        Err(_) => iso(now),
    }
}
