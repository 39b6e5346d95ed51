//! The timestamp convention shared by every tool: RFC3339 in UTC with
//! microsecond precision and a literal `Z`, which is what the Google
//! Calendar API accepts for `timeMin`/`timeMax`.
use chrono::{DateTime, Datelike, TimeDelta, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Combine day/hour/minute/second offsets into a single delta. Returns
/// `None` if any component or the sum overflows.
pub fn time_offset(days: i64, hours: i64, minutes: i64, seconds: i64) -> Option<TimeDelta> {
    TimeDelta::try_days(days)?
        .checked_add(&TimeDelta::try_hours(hours)?)?
        .checked_add(&TimeDelta::try_minutes(minutes)?)?
        .checked_add(&TimeDelta::try_seconds(seconds)?)
}

/// Move `now` by `delta`. Results outside years 0000-9999 can't be
/// written as RFC3339 so they are treated as out of range.
pub fn shift(now: DateTime<Utc>, delta: TimeDelta) -> Option<DateTime<Utc>> {
    now.checked_add_signed(delta)
        .filter(|t| (0..=9999).contains(&t.year()))
}
