//! Due-date arithmetic and display helpers.

use chrono::{DateTime, TimeDelta, Utc};

const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats a timestamp as `dd/mm/yyyy HH:MM:SS`.
#[must_use]
pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.format(DATE_TIME_FORMAT).to_string()
}

/// Formats a timestamp as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Returns the number of whole days from `now` until `due`.
///
/// Partial days are truncated towards zero, so a due date in the past
/// yields a negative count. Returns `None` when there is no due date.
#[must_use]
pub fn days_until_due(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    due.map(|at| at.signed_duration_since(now).num_days())
}

/// Shifts `at` by `days`, saturating at the representable bounds.
#[must_use]
pub fn add_days(at: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    shift(at, TimeDelta::try_days(days), days.is_negative())
}

/// Shifts `at` by `hours`, saturating at the representable bounds.
#[must_use]
pub fn add_hours(at: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    shift(at, TimeDelta::try_hours(hours), hours.is_negative())
}

fn shift(at: DateTime<Utc>, delta: Option<TimeDelta>, backwards: bool) -> DateTime<Utc> {
    delta
        .and_then(|step| at.checked_add_signed(step))
        .unwrap_or(if backwards {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
