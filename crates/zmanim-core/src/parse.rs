//! Parsing of raw scalar values found in a dataset.
//!
//! Timestamps arrive as strings from the calculation service. Three shapes
//! are accepted:
//! - RFC3339 with offset (e.g., `2024-06-01T05:32:00+03:00`), the usual case
//! - Unix epoch milliseconds (e.g., `1717209120000`)
//! - Unix epoch seconds (e.g., `1717209120`)

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{Result, ZmanimError};

/// Numbers above this are read as milliseconds rather than seconds.
const EPOCH_MS_THRESHOLD: i64 = 10_000_000_000;

/// Parse a raw timestamp into an absolute instant.
///
/// Integers whose magnitude exceeds 10^10 are epoch milliseconds, smaller
/// ones epoch seconds. Anything else must be RFC3339 with an offset.
///
/// # Arguments
///
/// * `input` - The raw timestamp, surrounding whitespace allowed
///
/// # Returns
///
/// The UTC instant on success, or a parse error for empty, malformed or
/// out-of-range input.
///
/// # Examples
///
/// ```
/// use zmanim_core::parse::parse_instant;
/// use chrono::{TimeZone, Utc};
///
/// let dt = parse_instant("2024-06-01T05:45:00+02:00").unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 1, 3, 45, 0).unwrap());
///
/// assert!(parse_instant("soon").is_err());
/// ```
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ZmanimError::ParseError("Empty timestamp".to_string()));
    }

    if let Ok(num) = trimmed.parse::<i64>() {
        return if num.unsigned_abs() > EPOCH_MS_THRESHOLD.unsigned_abs() {
            parse_epoch_ms(num)
        } else {
            parse_epoch_s(num)
        };
    }

    parse_rfc3339(trimmed)
}

fn parse_epoch_ms(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| ZmanimError::ParseError(format!("Epoch milliseconds out of range: {}", ms)))
}

fn parse_epoch_s(s: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(s, 0)
        .single()
        .ok_or_else(|| ZmanimError::ParseError(format!("Epoch seconds out of range: {}", s)))
}

fn parse_rfc3339(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            ZmanimError::ParseError(format!(
                "Invalid RFC3339 timestamp: '{}'. Error: {}",
                input, e
            ))
        })
}

/// Parse an ISO `yyyy-MM-dd` date key.
///
/// Only used for presentation. Grouping always compares the raw key string.
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        ZmanimError::ParseError(format!("Invalid date '{}'. Expected yyyy-MM-dd: {}", input, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_rfc3339_zulu() {
        let dt = parse_instant("2024-06-01T10:30:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parse_rfc3339_with_offset_normalizes_to_utc() {
        // 05:32+03:00 = 02:32Z
        let dt = parse_instant("2024-06-01T05:32:00+03:00").unwrap();
        assert_eq!(dt.hour(), 2);
        assert_eq!(dt.minute(), 32);
    }

    #[test]
    fn parse_negative_offset_across_midnight() {
        // 20:10-04:00 = 00:10Z next day
        let dt = parse_instant("2024-06-01T20:10:00-04:00").unwrap();
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn parse_epoch_milliseconds() {
        let dt = parse_instant("1717237800000").unwrap();
        assert_eq!(dt, Utc.timestamp_millis_opt(1717237800000).single().unwrap());
    }

    #[test]
    fn parse_epoch_seconds() {
        let dt = parse_instant(" 1717237800 ").unwrap();
        assert_eq!(dt, Utc.timestamp_opt(1717237800, 0).single().unwrap());
    }

    #[test]
    fn reject_garbage() {
        assert!(parse_instant("").is_err());
        assert!(parse_instant("   ").is_err());
        assert!(parse_instant("not-a-date").is_err());
        assert!(parse_instant("2024-06-01").is_err());
    }

    #[test]
    fn reject_extreme_integers() {
        assert!(parse_instant("-9223372036854775808").is_err());
        assert!(parse_instant("9223372036854775807").is_err());
    }

    #[test]
    fn negative_epoch_milliseconds() {
        let dt = parse_instant("-10000000001").unwrap();
        assert_eq!(dt, Utc.timestamp_millis_opt(-10_000_000_001).single().unwrap());
    }

    #[test]
    fn date_key_parsing() {
        let date = parse_date_key("2024-06-01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 1));
        assert!(parse_date_key("06/01/2024").is_err());
    }
}
