//! # Calendar-Day Resolution
//!
//! The ledger and the cash register group records by *local* calendar day:
//! the interval [00:00:00.000, 23:59:59.999] of the operator's timezone.
//! Production entries and registers store the resolved `NaiveDate`
//! directly; sales store full UTC instants and are filtered through
//! [`day_bounds_utc`].

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::ValidationError;

/// The current local calendar day. Used whenever a request omits `date`.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a client-supplied date into a local calendar day.
///
/// Accepts either a plain `YYYY-MM-DD` day or an RFC 3339 timestamp
/// (which is resolved to the local day it falls on).
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use masa_core::day::parse_day;
///
/// assert_eq!(
///     parse_day("2026-08-06").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
/// );
/// assert!(parse_day("ayer").is_err());
/// ```
pub fn parse_day(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();

    if let Ok(day) = value.parse::<NaiveDate>() {
        return Ok(day);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Local).date_naive());
    }

    Err(ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// Returns the UTC instants bounding a local calendar day:
/// local 00:00:00.000 and local 23:59:59.999.
pub fn day_bounds_utc(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN);
    let end = start + Duration::milliseconds(86_399_999);
    (local_to_utc(start), local_to_utc(end))
}

/// Resolves a naive local wall-clock time to a UTC instant.
///
/// DST folds take the earlier instant; wall-clock times skipped by a DST
/// gap fall back to reading the naive time as UTC.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_day() {
        let day = parse_day("2026-08-06").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
    }

    #[test]
    fn test_parse_day_trims() {
        assert!(parse_day(" 2026-08-06 ").is_ok());
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        // Resolves to whatever local day the instant falls on; at minimum
        // it must parse and land within a day of the nominal date.
        let day = parse_day("2026-08-06T12:00:00Z").unwrap();
        let nominal = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let distance = (day - nominal).num_days().abs();
        assert!(distance <= 1);
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        assert!(parse_day("ayer").is_err());
        assert!(parse_day("").is_err());
        assert!(parse_day("2026-13-40").is_err());
    }

    #[test]
    fn test_day_bounds_ordering() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let (start, end) = day_bounds_utc(day);
        assert!(start < end);
        // Full day minus the final millisecond
        assert_eq!((end - start).num_milliseconds(), 86_399_999);
    }
}
