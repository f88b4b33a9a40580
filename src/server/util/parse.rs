use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Which end of a date range a value bounds.
///
/// A bare date as a lower bound means the start of that day; as an upper bound it
/// covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a history date filter.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps (taken as
/// UTC) and plain `YYYY-MM-DD` dates. A `+hh:mm` offset sent without percent-encoding
/// arrives as ` hh:mm` and is read as the positive offset it was.
///
/// # Arguments
/// - `value` - Raw query string value
/// - `bound` - Whether the value is the lower or upper end of the range
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Parsed instant
/// - `None` - The value matches none of the accepted formats
pub fn parse_date_bound(value: &str, bound: DateBound) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(restored) = restore_plus_offset(value) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&restored) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let time = match bound {
        DateBound::Start => NaiveTime::from_hms_opt(0, 0, 0)?,
        DateBound::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?,
    };

    Some(date.and_time(time).and_utc())
}

/// Rebuilds `...T12:00:00 02:00` into `...T12:00:00+02:00`.
fn restore_plus_offset(value: &str) -> Option<String> {
    let (timestamp, offset) = value.rsplit_once(' ')?;
    let bytes = offset.as_bytes();
    let is_offset = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());

    (is_offset && timestamp.contains('T')).then(|| format!("{}+{}", timestamp, offset))
}
