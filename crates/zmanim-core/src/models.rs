//! Core data types for zmanim comparison.
//!
//! Input side:
//! - [`Location`] - one location's label, zone and raw per-date timestamps
//! - [`LocationDataset`] - the ordered locations of one request
//! - [`ZmanRecord`] - one parsed, non-null timestamp for a (zman, location, date)
//!
//! Derived side:
//! - [`ComparisonEntry`] - a record with its local display string
//! - [`DateGroup`] / [`LocationGroup`] - entries sharing a date or a location

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Raw timestamps of one zman, keyed by ISO date. `None` means the service
/// had no value for that date.
pub type DailyTimes = BTreeMap<String, Option<String>>;

/// One requested location with its raw zmanim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Display label.
    pub label: String,
    /// IANA timezone identifier of the location.
    pub timezone: String,
    /// zman id -> date -> raw timestamp.
    #[serde(default)]
    pub times: BTreeMap<String, DailyTimes>,
}

impl Location {
    pub fn new(label: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            timezone: timezone.into(),
            times: BTreeMap::new(),
        }
    }

    /// Builder-style insert of one raw value.
    pub fn with_time(
        mut self,
        zman: impl Into<String>,
        date: impl Into<String>,
        raw: Option<&str>,
    ) -> Self {
        self.times
            .entry(zman.into())
            .or_default()
            .insert(date.into(), raw.map(str::to_string));
        self
    }

    /// Raw values recorded for `zman`, if the service returned that zman at all.
    pub fn daily_times(&self, zman: &str) -> Option<&DailyTimes> {
        self.times.get(zman)
    }
}

/// The ordered set of locations of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDataset {
    pub locations: Vec<Location>,
}

impl LocationDataset {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Every date key that appears for any of `zmanim`, in ascending order.
    /// Dates whose values are all null are included.
    pub fn dates_for<S: AsRef<str>>(&self, zmanim: &[S]) -> Vec<String> {
        let mut dates: Vec<String> = self
            .locations
            .iter()
            .flat_map(|loc| {
                zmanim
                    .iter()
                    .filter_map(|z| loc.daily_times(z.as_ref()))
                    .flat_map(|daily| daily.keys().cloned())
            })
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}

/// One parsed, non-null input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZmanRecord {
    pub zman_id: String,
    /// Position in the request's location list.
    pub location_index: usize,
    /// ISO date key exactly as supplied.
    pub date: String,
    pub instant: DateTime<Utc>,
    pub timezone: Tz,
}

/// A record made comparable and displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    /// Location label.
    pub location: String,
    pub location_index: usize,
    pub date: String,
    pub instant: DateTime<Utc>,
    /// Wall-clock time in the location's own zone.
    pub local_time: String,
}

/// Entries of one zman sharing a date, ascending by instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub entries: Vec<ComparisonEntry>,
}

/// Entries of one zman sharing a location, ascending by instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    pub location: String,
    pub location_index: usize,
    pub entries: Vec<ComparisonEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocationDataset {
        LocationDataset::new(vec![
            Location::new("A", "UTC")
                .with_time("sunrise", "2024-06-02", Some("2024-06-02T05:00:00Z"))
                .with_time("sunset", "2024-06-01", None),
            Location::new("B", "UTC").with_time(
                "sunrise",
                "2024-06-01",
                Some("2024-06-01T05:00:00Z"),
            ),
        ])
    }

    #[test]
    fn builder_collects_times() {
        let loc = Location::new("A", "UTC")
            .with_time("sunrise", "2024-06-01", Some("x"))
            .with_time("sunrise", "2024-06-02", None);
        let daily = loc.daily_times("sunrise").unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily["2024-06-02"], None);
        assert!(loc.daily_times("sunset").is_none());
    }

    #[test]
    fn dates_are_sorted_and_unique() {
        let ds = sample();
        assert_eq!(ds.dates_for(&["sunrise"]), vec!["2024-06-01", "2024-06-02"]);
        assert_eq!(
            ds.dates_for(&["sunrise", "sunset"]),
            vec!["2024-06-01", "2024-06-02"]
        );
        assert!(ds.dates_for(&["chatzot"]).is_empty());
    }

    #[test]
    fn dataset_deserializes_with_missing_times() {
        let ds: LocationDataset = serde_json::from_str(
            r#"{"locations":[{"label":"A","timezone":"UTC"}]}"#,
        )
        .unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.locations[0].times.is_empty());
    }
}
