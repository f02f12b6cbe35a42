//! Timezone handling utilities.
//!
//! This module parses IANA timezone names and renders absolute instants as
//! wall-clock strings observed in a given zone. Rendering is done through the
//! [`LocalTimeFormat`] trait so callers can substitute their own clock style.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ZmanimError};

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use zmanim_core::tz::parse_tz;
///
/// let tz = parse_tz("Asia/Jerusalem").unwrap();
/// assert_eq!(tz.to_string(), "Asia/Jerusalem");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ZmanimError::InvalidTimezone(name.to_string()))
}

/// Convert a UTC instant to local time in the specified timezone.
///
/// The zone's offset is resolved for that specific instant, so DST
/// transitions are handled by chrono-tz.
///
/// # Arguments
///
/// * `utc` - The absolute instant
/// * `tz` - The zone to observe it in
///
/// # Returns
///
/// The same instant carrying the zone's local offset.
pub fn utc_to_local(utc: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    utc.with_timezone(&tz)
}

/// Renders an instant as a wall-clock string in a zone.
///
/// Implementations must depend only on `instant` and `tz`, never on the
/// process's own local timezone.
pub trait LocalTimeFormat {
    fn local_time(&self, instant: DateTime<Utc>, tz: Tz) -> String;
}

/// 12-hour clock without a leading zero on the hour, e.g. `5:32 AM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwelveHourClock;

impl LocalTimeFormat for TwelveHourClock {
    fn local_time(&self, instant: DateTime<Utc>, tz: Tz) -> String {
        utc_to_local(instant, tz).format("%-I:%M %p").to_string()
    }
}

/// 24-hour clock, e.g. `17:32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwentyFourHourClock;

impl LocalTimeFormat for TwentyFourHourClock {
    fn local_time(&self, instant: DateTime<Utc>, tz: Tz) -> String {
        utc_to_local(instant, tz).format("%H:%M").to_string()
    }
}

impl<F> LocalTimeFormat for F
where
    F: Fn(DateTime<Utc>, Tz) -> String,
{
    fn local_time(&self, instant: DateTime<Utc>, tz: Tz) -> String {
        self(instant, tz)
    }
}

/// Format `instant` with the default 12-hour clock in `tz`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zmanim_core::tz::{format_local_time, parse_tz};
///
/// let instant = Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap();
/// let tz = parse_tz("America/New_York").unwrap();
/// assert_eq!(format_local_time(instant, tz), "6:30 AM");
/// ```
pub fn format_local_time(instant: DateTime<Utc>, tz: Tz) -> String {
    TwelveHourClock.local_time(instant, tz)
}
