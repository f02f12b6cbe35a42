//! Time normalization.
//!
//! This is the single filter stage of the pipeline: null values, malformed
//! timestamps and locations with an unusable zone are dropped here, so the
//! aggregation and comparison stages can assume every entry is complete.

use tracing::{debug, warn};

use crate::models::{ComparisonEntry, LocationDataset, ZmanRecord};
use crate::parse::parse_instant;
use crate::tz::{LocalTimeFormat, parse_tz};

/// Collect every resolvable record of `zman` from the dataset.
///
/// Records are produced in location order, then ascending date order.
pub fn collect_records(dataset: &LocationDataset, zman: &str) -> Vec<ZmanRecord> {
    let mut records = Vec::new();

    for (location_index, location) in dataset.locations.iter().enumerate() {
        let Some(daily) = location.daily_times(zman) else {
            continue;
        };

        let timezone = match parse_tz(&location.timezone) {
            Ok(tz) => tz,
            Err(e) => {
                warn!(location = %location.label, zman, error = %e, "skipping location");
                continue;
            }
        };

        for (date, raw) in daily {
            let Some(raw) = raw.as_deref() else {
                continue;
            };

            match parse_instant(raw) {
                Ok(instant) => records.push(ZmanRecord {
                    zman_id: zman.to_string(),
                    location_index,
                    date: date.clone(),
                    instant,
                    timezone,
                }),
                Err(e) => {
                    warn!(
                        location = %location.label,
                        zman,
                        date = %date,
                        error = %e,
                        "dropping malformed timestamp"
                    );
                }
            }
        }
    }

    debug!(zman, records = records.len(), "collected records");
    records
}

/// Turn records into comparison entries, rendering each instant in its
/// location's zone with `format`.
pub fn normalize_records<F: LocalTimeFormat + ?Sized>(
    dataset: &LocationDataset,
    records: &[ZmanRecord],
    format: &F,
) -> Vec<ComparisonEntry> {
    records
        .iter()
        .filter_map(|record| {
            let location = dataset.locations.get(record.location_index)?;
            Some(ComparisonEntry {
                location: location.label.clone(),
                location_index: record.location_index,
                date: record.date.clone(),
                instant: record.instant,
                local_time: format.local_time(record.instant, record.timezone),
            })
        })
        .collect()
}

/// Normalize every value of `zman` in the dataset.
///
/// Runs [`collect_records`] followed by [`normalize_records`]. Null values,
/// malformed timestamps and locations with an unknown zone are left out.
///
/// # Arguments
///
/// * `dataset` - The locations to read from
/// * `zman` - The zman identifier (e.g., "sunrise")
/// * `format` - Renders each instant in its location's zone
///
/// # Returns
///
/// One entry per usable value, in location order and then date order.
pub fn normalize<F: LocalTimeFormat + ?Sized>(
    dataset: &LocationDataset,
    zman: &str,
    format: &F,
) -> Vec<ComparisonEntry> {
    let records = collect_records(dataset, zman);
    normalize_records(dataset, &records, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::tz::{TwelveHourClock, TwentyFourHourClock};
    use chrono::{TimeZone, Utc};

    fn dataset() -> LocationDataset {
        LocationDataset::new(vec![
            Location::new("New York", "America/New_York")
                .with_time("sunrise", "2024-06-01", Some("2024-06-01T10:30:00Z"))
                .with_time("sunrise", "2024-06-02", None)
                .with_time("sunrise", "2024-06-03", Some("garbage")),
            Location::new("Nowhere", "Not/AZone").with_time(
                "sunrise",
                "2024-06-01",
                Some("2024-06-01T04:00:00Z"),
            ),
            Location::new("Jerusalem", "Asia/Jerusalem")
                .with_time("sunrise", "2024-06-01", Some("2024-06-01T05:45:00+03:00"))
                .with_time("sunset", "2024-06-01", Some("2024-06-01T19:58:00+03:00")),
        ])
    }

    #[test]
    fn drops_null_malformed_and_unzoned() {
        let records = collect_records(&dataset(), "sunrise");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location_index, 0);
        assert_eq!(records[0].date, "2024-06-01");
        assert_eq!(records[1].location_index, 2);
        assert_eq!(
            records[1].instant,
            Utc.with_ymd_and_hms(2024, 6, 1, 2, 45, 0).unwrap()
        );
    }

    #[test]
    fn zman_missing_everywhere_yields_nothing() {
        assert!(collect_records(&dataset(), "chatzot").is_empty());
    }

    #[test]
    fn entries_render_in_own_zone() {
        let entries = normalize(&dataset(), "sunrise", &TwelveHourClock);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "New York");
        assert_eq!(entries[0].local_time, "6:30 AM");
        assert_eq!(entries[1].location, "Jerusalem");
        assert_eq!(entries[1].local_time, "5:45 AM");
    }

    #[test]
    fn formatter_is_injectable() {
        let entries = normalize(&dataset(), "sunset", &TwentyFourHourClock);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].local_time, "19:58");
    }

    #[test]
    fn out_of_range_integer_is_dropped() {
        let ds = LocationDataset::new(vec![
            Location::new("Quito", "America/Guayaquil")
                .with_time("sunrise", "2024-06-01", Some("-9223372036854775808"))
                .with_time("sunrise", "2024-06-02", Some("2024-06-02T11:13:00Z")),
        ]);
        let entries = normalize(&ds, "sunrise", &TwelveHourClock);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2024-06-02");
        assert_eq!(entries[0].local_time, "6:13 AM");
    }

    #[test]
    fn record_zman_id_is_kept() {
        let records = collect_records(&dataset(), "sunset");
        assert_eq!(records[0].zman_id, "sunset");
    }
}
