//! Calendar-date parsing.
//!
//! The domain reasons in whole calendar days. Anything carrying a
//! time-of-day is truncated to its date here, before it reaches the
//! classifier.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{DomainError, DomainResult};

/// Parse a calendar date, discarding any time-of-day.
///
/// Accepted forms:
/// - `2024-03-01`
/// - `2024-03-01T18:30:00` / `2024-03-01 18:30:00` (naive, optional fraction)
/// - `2024-03-01T18:30:00+02:00` / `...Z` (RFC 3339; the date as written is kept)
pub fn parse_calendar_date(raw: &str) -> DomainResult<NaiveDate> {
    let s = raw.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        // Keep the writer's local calendar day rather than shifting to UTC.
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(DomainError::unparseable_date(format!("`{raw}`")))
}
