use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// parses a pickup timestamp into naive wall-clock time. no timezone
/// conversion is performed: offsets in RFC 3339 values are dropped and the
/// local time as written is kept.
///
/// accepted forms:
/// - `2024-03-04T17:30:00` or `2024-03-04 17:30:00`, optionally with fractional seconds
/// - any of the above followed by ` UTC`
/// - RFC 3339 with an offset, such as `2024-03-04T17:30:00-05:00`
pub fn parse_pickup_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix(" UTC").unwrap_or(trimmed);
    let mut error = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(datetime) => return Ok(datetime.naive_local()),
        Err(e) => e,
    };
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(datetime) => return Ok(datetime),
            Err(e) => error = e,
        }
    }
    Err(error)
}
