//! One-call analysis of a dataset.
//!
//! [`analyze`] runs normalization, aggregation and comparison for each
//! selected zman and returns a read-only [`Analysis`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{Aggregation, aggregate};
use crate::catalog::{Category, find_zman, order_selection};
use crate::compare::{
    DateSummary, Extremes, LocationSummary, PairwiseRelations, overall_extremes, summarize_date,
    summarize_location,
};
use crate::models::LocationDataset;
use crate::normalize::normalize;
use crate::tz::{LocalTimeFormat, TwelveHourClock};

/// Zmanim selected when the caller does not choose any.
pub const DEFAULT_ZMANIM: [&str; 3] = ["sunrise", "sunset", "chatzot"];

/// Which zmanim to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    zmanim: Vec<String>,
}

impl AnalysisOptions {
    /// Selection in catalog order, unknown ids last, duplicates removed.
    pub fn new<S: AsRef<str>>(zmanim: &[S]) -> Self {
        Self {
            zmanim: order_selection(zmanim),
        }
    }

    pub fn zmanim(&self) -> &[String] {
        &self.zmanim
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(&DEFAULT_ZMANIM)
    }
}

/// Everything derived for one zman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZmanAnalysis {
    pub zman: String,
    pub label: String,
    /// `None` for ids outside the catalog.
    pub category: Option<Category>,
    /// `None` when no location has a value for this zman.
    pub overall: Option<Extremes>,
    /// Ascending by date.
    pub by_date: Vec<DateSummary>,
    /// In dataset order.
    pub by_location: Vec<LocationSummary>,
    pub relations: PairwiseRelations,
}

impl ZmanAnalysis {
    /// Analyse a single zman.
    pub fn compute<F: LocalTimeFormat + ?Sized>(
        dataset: &LocationDataset,
        zman: &str,
        format: &F,
    ) -> Self {
        let option = find_zman(zman);
        if option.is_none() {
            warn!(zman, "zman is not in the catalog, using its id as label");
        }

        let aggregation: Aggregation = aggregate(dataset, zman, normalize(dataset, zman, format));

        Self {
            zman: zman.to_string(),
            label: option.map_or(zman, |o| o.label).to_string(),
            category: option.map(|o| o.category),
            overall: overall_extremes(&aggregation),
            by_date: aggregation.by_date.iter().filter_map(summarize_date).collect(),
            by_location: aggregation
                .by_location
                .iter()
                .filter_map(summarize_location)
                .collect(),
            relations: PairwiseRelations::compute(dataset, &aggregation),
        }
    }

    pub fn has_data(&self) -> bool {
        self.overall.is_some()
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Location labels in dataset order.
    pub locations: Vec<String>,
    /// One entry per selected zman, in selection order.
    pub zmanim: Vec<ZmanAnalysis>,
}

impl Analysis {
    pub fn zman(&self, id: &str) -> Option<&ZmanAnalysis> {
        self.zmanim.iter().find(|z| z.zman == id)
    }
}

/// Analyse every selected zman, rendering local times with `format`.
pub fn analyze_with<F: LocalTimeFormat + ?Sized>(
    dataset: &LocationDataset,
    options: &AnalysisOptions,
    format: &F,
) -> Analysis {
    debug!(
        locations = dataset.len(),
        zmanim = options.zmanim().len(),
        "starting analysis"
    );

    Analysis {
        locations: dataset.locations.iter().map(|l| l.label.clone()).collect(),
        zmanim: options
            .zmanim()
            .iter()
            .map(|zman| ZmanAnalysis::compute(dataset, zman, format))
            .collect(),
    }
}

/// Analyse every selected zman with the 12-hour clock.
///
/// ```
/// use zmanim_core::prelude::*;
///
/// let dataset = LocationDataset::new(vec![
///     Location::new("A", "UTC").with_time("sunset", "2024-06-01", Some("2024-06-01T19:58:00Z")),
///     Location::new("B", "UTC").with_time("sunset", "2024-06-01", Some("2024-06-01T20:12:00Z")),
/// ]);
/// let analysis = analyze(&dataset, &AnalysisOptions::new(&["sunset"]));
/// let sunset = analysis.zman("sunset").unwrap();
///
/// assert_eq!(sunset.by_date[0].difference.unwrap().to_string(), "14 minutes");
/// assert_eq!(sunset.relations.relation(0, 1), Relation::AlwaysEarlier);
/// ```
pub fn analyze(dataset: &LocationDataset, options: &AnalysisOptions) -> Analysis {
    analyze_with(dataset, options, &TwelveHourClock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Relation;
    use crate::models::Location;

    fn dataset() -> LocationDataset {
        LocationDataset::new(vec![
            Location::new("Jerusalem", "Asia/Jerusalem")
                .with_time("sunrise", "2024-06-01", Some("2024-06-01T05:32:00+03:00"))
                .with_time("sunrise", "2024-06-02", Some("2024-06-02T05:32:00+03:00"))
                .with_time("sunset", "2024-06-01", Some("2024-06-01T19:45:00+03:00"))
                .with_time("custom", "2024-06-01", Some("2024-06-01T12:00:00+03:00")),
            Location::new("New York", "America/New_York")
                .with_time("sunrise", "2024-06-01", Some("2024-06-01T05:25:00-04:00"))
                .with_time("sunrise", "2024-06-02", Some("2024-06-02T05:25:00-04:00"))
                .with_time("sunset", "2024-06-01", None),
        ])
    }

    #[test]
    fn default_options() {
        assert_eq!(
            AnalysisOptions::default().zmanim(),
            &["sunrise", "chatzot", "sunset"]
        );
    }

    #[test]
    fn results_follow_selection_order() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["custom", "sunset", "sunrise"]));
        let ids: Vec<_> = analysis.zmanim.iter().map(|z| z.zman.as_str()).collect();
        assert_eq!(ids, vec!["sunrise", "sunset", "custom"]);
        assert_eq!(analysis.locations, vec!["Jerusalem", "New York"]);
    }

    #[test]
    fn absolute_instants_decide_order_across_zones() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["sunrise"]));
        let sunrise = analysis.zman("sunrise").unwrap();

        // 05:32 in Jerusalem is 02:32Z, well before 09:25Z in New York.
        assert_eq!(sunrise.relations.relation(0, 1), Relation::AlwaysEarlier);
        assert_eq!(sunrise.relations.relation(1, 0), Relation::AlwaysLater);

        let day = &sunrise.by_date[0];
        assert_eq!(day.earliest.location, "Jerusalem");
        assert_eq!(day.earliest.local_time, "5:32 AM");
        assert_eq!(day.latest.local_time, "5:25 AM");
        assert_eq!(day.difference.unwrap().to_string(), "6 hours 53 minutes");
    }

    #[test]
    fn unknown_zman_passes_through() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["custom"]));
        let custom = analysis.zman("custom").unwrap();
        assert_eq!(custom.label, "custom");
        assert_eq!(custom.category, None);
        assert!(custom.has_data());
        assert_eq!(custom.by_location.len(), 1);
    }

    #[test]
    fn missing_zman_yields_empty_analysis() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["tzeit72min"]));
        let tzeit = analysis.zman("tzeit72min").unwrap();
        assert!(!tzeit.has_data());
        assert!(tzeit.by_date.is_empty());
        assert_eq!(tzeit.relations.pairs().len(), 1);
        assert_eq!(tzeit.relations.relation(0, 1), Relation::None);
    }

    #[test]
    fn partial_data_degrades_gracefully() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["sunset"]));
        let sunset = analysis.zman("sunset").unwrap();
        assert_eq!(sunset.by_location.len(), 1);
        assert_eq!(sunset.by_date[0].difference, None);
        assert_eq!(sunset.relations.relation(0, 1), Relation::None);
    }

    #[test]
    fn analysis_is_idempotent() {
        let ds = dataset();
        let options = AnalysisOptions::default();
        assert_eq!(analyze(&ds, &options), analyze(&ds, &options));
    }

    #[test]
    fn analysis_serializes() {
        let analysis = analyze(&dataset(), &AnalysisOptions::new(&["sunrise"]));
        let json = serde_json::to_value(&analysis).unwrap();
        let sunrise = &json["zmanim"][0];
        assert_eq!(sunrise["label"], "Sunrise");
        assert_eq!(sunrise["category"], "morning");
        assert_eq!(sunrise["relations"][0]["relation"], "always_earlier");
        assert_eq!(sunrise["overall"]["earliest"]["instant"], "2024-06-01T02:32:00Z");
        assert_eq!(sunrise["by_date"][0]["difference"]["minutes"], 413);
    }
}
