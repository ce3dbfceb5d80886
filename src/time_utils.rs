use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::round::Countdown;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Day marker label: weekday abbreviation and day of month, e.g. `Mon 12`
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

/// Countdown text shown under the round strip.
///
/// - more than a day left -> `3d 04h 12m 09s`
/// - otherwise -> `04h 12m 09s`
pub fn format_countdown(countdown: &Countdown) -> String {
    if countdown.days > 0 {
        format!(
            "{}d {:02}h {:02}m {:02}s",
            countdown.days, countdown.hours, countdown.minutes, countdown.seconds
        )
    } else {
        format!("{:02}h {:02}m {:02}s", countdown.hours, countdown.minutes, countdown.seconds)
    }
}

/// Parse a caller-supplied reference instant into the schedule's wall clock.
///
/// RFC 3339 strings carrying an offset are converted to `offset`; strings
/// without one are taken as wall-clock time already.
pub fn parse_reference_instant(input: &str, offset: FixedOffset) -> DomainResult<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&offset).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ValidationError::InvalidInstant(format!("cannot parse {input:?}")).into())
}
