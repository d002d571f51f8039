//! Deadline date handling.
//!
//! Form deadlines travel as `YYYY-MM-DD` strings (the value shape of a date
//! input), are compared and stored as whole seconds since the Unix epoch at
//! UTC midnight, and render in the RFC-1123-style UTC form the proposal
//! description and project cards display. Nothing here reads a clock; `now`
//! is always a parameter.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

/// A date value that cannot be parsed or rendered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input is not a valid `YYYY-MM-DD` calendar date.
    #[error("date must be a valid YYYY-MM-DD value")]
    Malformed,
    /// Timestamp is outside the representable calendar range.
    #[error("timestamp out of range")]
    OutOfRange,
}

/// Parse a `YYYY-MM-DD` form value into a calendar date.
///
/// # Errors
///
/// Returns [`DateError::Malformed`] for anything that is not a valid date.
pub fn parse_form_date(input: &str) -> Result<Date, DateError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), format).map_err(|_| DateError::Malformed)
}

/// Whole seconds since the Unix epoch at UTC midnight of `date`.
#[must_use]
pub fn unix_seconds(date: Date) -> i64 {
    PrimitiveDateTime::new(date, Time::MIDNIGHT)
        .assume_utc()
        .unix_timestamp()
}

/// Render a Unix timestamp as e.g. `Sun, 18 Aug 2222 00:00:00 GMT`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] when the timestamp falls outside the
/// representable calendar range.
pub fn format_utc(unix_secs: i64) -> Result<String, DateError> {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    let timestamp =
        OffsetDateTime::from_unix_timestamp(unix_secs).map_err(|_| DateError::OutOfRange)?;
    timestamp.format(format).map_err(|_| DateError::OutOfRange)
}

/// Default proposal deadline: thirty days after `now`, as a form value.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] when `now` falls outside the
/// representable calendar range.
pub fn default_deadline(now_secs: i64) -> Result<String, DateError> {
    let format = format_description!("[year]-[month]-[day]");
    let now = OffsetDateTime::from_unix_timestamp(now_secs).map_err(|_| DateError::OutOfRange)?;
    (now + Duration::days(30))
        .date()
        .format(format)
        .map_err(|_| DateError::OutOfRange)
}
