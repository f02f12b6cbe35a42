//! Grouping of comparison entries.
//!
//! One [`Aggregation`] covers a single zman. Entries are bucketed once by
//! their exact date key and once by location; every group is sorted
//! ascending by instant, with ties broken by location index and then date so
//! the order never depends on input iteration order.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::models::{ComparisonEntry, DateGroup, LocationDataset, LocationGroup};

/// Entries of one zman grouped by date and by location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub zman: String,
    /// Ascending by date key.
    pub by_date: Vec<DateGroup>,
    /// In dataset order; locations without entries are absent.
    pub by_location: Vec<LocationGroup>,
}

impl Aggregation {
    pub fn date_group(&self, date: &str) -> Option<&DateGroup> {
        self.by_date.iter().find(|g| g.date == date)
    }

    pub fn location_group(&self, location_index: usize) -> Option<&LocationGroup> {
        self.by_location
            .iter()
            .find(|g| g.location_index == location_index)
    }

    /// All entries of the zman, ascending by instant.
    pub fn all_entries(&self) -> Vec<&ComparisonEntry> {
        let mut all: Vec<&ComparisonEntry> = self
            .by_location
            .iter()
            .flat_map(|g| g.entries.iter())
            .collect();
        all.sort_by(|a, b| compare_entries(a, b));
        all
    }

    pub fn is_empty(&self) -> bool {
        self.by_location.is_empty()
    }
}

/// Total order used inside every group.
pub(crate) fn compare_entries(a: &ComparisonEntry, b: &ComparisonEntry) -> std::cmp::Ordering {
    a.instant
        .cmp(&b.instant)
        .then_with(|| a.location_index.cmp(&b.location_index))
        .then_with(|| a.date.cmp(&b.date))
}

/// Group already-normalized entries of `zman`.
///
/// # Arguments
///
/// * `dataset` - Supplies location labels for the location groups
/// * `zman` - The zman the entries belong to
/// * `entries` - Output of [`crate::normalize::normalize`] for `zman`
///
/// # Returns
///
/// Date groups ascending by date key and location groups in dataset order,
/// each sorted ascending by instant.
pub fn aggregate(
    dataset: &LocationDataset,
    zman: &str,
    entries: Vec<ComparisonEntry>,
) -> Aggregation {
    let mut by_date: BTreeMap<String, Vec<ComparisonEntry>> = BTreeMap::new();
    let mut by_location: BTreeMap<usize, Vec<ComparisonEntry>> = BTreeMap::new();

    for entry in entries {
        by_date
            .entry(entry.date.clone())
            .or_default()
            .push(entry.clone());
        by_location
            .entry(entry.location_index)
            .or_default()
            .push(entry);
    }

    let by_date: Vec<DateGroup> = by_date
        .into_iter()
        .map(|(date, mut entries)| {
            entries.sort_by(compare_entries);
            DateGroup { date, entries }
        })
        .collect();

    let by_location: Vec<LocationGroup> = by_location
        .into_iter()
        .map(|(location_index, mut entries)| {
            entries.sort_by(compare_entries);
            let location = dataset
                .locations
                .get(location_index)
                .map(|l| l.label.clone())
                .unwrap_or_default();
            LocationGroup {
                location,
                location_index,
                entries,
            }
        })
        .collect();

    debug!(
        zman,
        dates = by_date.len(),
        locations = by_location.len(),
        "aggregated entries"
    );

    Aggregation {
        zman: zman.to_string(),
        by_date,
        by_location,
    }
}
