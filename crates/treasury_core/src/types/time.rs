//! Lenient date handling for check records.
//!
//! Check records carry `issue_date`, `due_date` and `created_at` as free
//! text. The store writes ISO dates (`2024-06-15`) for business dates and
//! RFC 3339 timestamps for creation times, but hand-edited or imported
//! records may hold anything, including an empty string.
//!
//! All instants are compared as wall-clock `NaiveDateTime` values in the
//! ledger's local time. A date-only value resolves to 00:00 on that day.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use treasury_core::types::time::parse_instant;
//!
//! let due = parse_instant("2024-06-15").unwrap();
//! assert_eq!(due.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//!
//! assert!(parse_instant("").is_err());
//! assert!(parse_instant("15/06/2024").is_err());
//! ```

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::DateError;

/// Date-only layout written by the record store.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive timestamp layouts accepted in addition to RFC 3339.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a record date field into a wall-clock instant.
///
/// Accepted layouts, tried in order:
/// 1. RFC 3339 (`2024-06-15T10:30:00Z`, `2024-06-15T10:30:00.123+01:00`),
///    taken as wall-clock time in its own offset
/// 2. Naive timestamps (`2024-06-15T10:30:00`, `2024-06-15 10:30:00`)
/// 3. ISO dates (`2024-06-15`), resolved to 00:00
///
/// # Errors
///
/// `DateError::Empty` for blank input, `DateError::ParseError` otherwise.
pub fn parse_instant(s: &str) -> Result<NaiveDateTime, DateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(start_of_day)
        .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
}

/// Returns 00:00:00 on the given day.
#[inline]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Returns the last representable millisecond of the given day (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
        Some(time) => date.and_time(time),
        None => start_of_day(date),
    }
}

/// Adds whole calendar days, saturating at the end of chrono's range.
pub fn days_after(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
