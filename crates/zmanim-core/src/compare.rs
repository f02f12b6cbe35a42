//! Comparison of grouped entries.
//!
//! Every function here reads an [`Aggregation`] or one of its groups and
//! builds a new summary value. Groups are assumed to be sorted ascending, as
//! produced by [`crate::aggregate::aggregate`].

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{Aggregation, compare_entries};
use crate::models::{ComparisonEntry, DateGroup, LocationDataset, LocationGroup};

/// Absolute gap between two instants, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeDifference {
    pub minutes: i64,
}

impl TimeDifference {
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            minutes: (b - a).num_minutes().abs(),
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

impl std::fmt::Display for TimeDifference {
    /// `14 minutes`, `1 hour 1 minute`, `2 hours 0 minutes`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.minutes / 60;
        let minutes = self.minutes % 60;
        if hours == 0 {
            write!(f, "{}", plural(minutes, "minute"))
        } else {
            write!(f, "{} {}", plural(hours, "hour"), plural(minutes, "minute"))
        }
    }
}

/// The earliest and latest entry of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremes {
    pub earliest: ComparisonEntry,
    pub latest: ComparisonEntry,
}

/// Ranking of locations on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSummary {
    pub date: String,
    /// Ascending by instant.
    pub ranking: Vec<ComparisonEntry>,
    pub earliest: ComparisonEntry,
    pub latest: ComparisonEntry,
    /// `None` when only one location has a value on this date.
    pub difference: Option<TimeDifference>,
}

/// A location's own earliest and latest day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub location: String,
    pub location_index: usize,
    pub earliest: ComparisonEntry,
    pub latest: ComparisonEntry,
}

fn first_and_last(entries: &[ComparisonEntry]) -> Option<(&ComparisonEntry, &ComparisonEntry)> {
    Some((entries.first()?, entries.last()?))
}

pub fn summarize_date(group: &DateGroup) -> Option<DateSummary> {
    let (earliest, latest) = first_and_last(&group.entries)?;
    let difference =
        (group.entries.len() > 1).then(|| TimeDifference::between(earliest.instant, latest.instant));

    Some(DateSummary {
        date: group.date.clone(),
        ranking: group.entries.clone(),
        earliest: earliest.clone(),
        latest: latest.clone(),
        difference,
    })
}

pub fn summarize_location(group: &LocationGroup) -> Option<LocationSummary> {
    let (earliest, latest) = first_and_last(&group.entries)?;

    Some(LocationSummary {
        location: group.location.clone(),
        location_index: group.location_index,
        earliest: earliest.clone(),
        latest: latest.clone(),
    })
}

/// Globally earliest and latest entry of the zman, across locations and dates.
pub fn overall_extremes(aggregation: &Aggregation) -> Option<Extremes> {
    let entries = || aggregation.by_location.iter().flat_map(|g| g.entries.iter());
    let earliest = entries().min_by(|a, b| compare_entries(a, b))?;
    let latest = entries().max_by(|a, b| compare_entries(a, b))?;

    Some(Extremes {
        earliest: earliest.clone(),
        latest: latest.clone(),
    })
}

/// Ordering verdict of one location against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Strictly earlier on every shared date.
    AlwaysEarlier,
    /// Strictly later on every shared date.
    AlwaysLater,
    /// No shared dates, a tie, or a different ordering on some date.
    None,
}

impl Relation {
    /// The verdict seen from the other location.
    pub fn inverse(self) -> Self {
        match self {
            Relation::AlwaysEarlier => Relation::AlwaysLater,
            Relation::AlwaysLater => Relation::AlwaysEarlier,
            Relation::None => Relation::None,
        }
    }

    pub fn is_directional(self) -> bool {
        self != Relation::None
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::AlwaysEarlier => write!(f, "always earlier"),
            Relation::AlwaysLater => write!(f, "always later"),
            Relation::None => write!(f, "no consistent order"),
        }
    }
}

/// Verdict of `a` against `b` plus the number of dates it was based on.
///
/// Evaluation stops at the first shared date that contradicts the ordering
/// seen so far, or at the first exact tie; `shared_dates` then counts the
/// dates inspected up to that point.
///
/// # Arguments
///
/// * `a` - Entries of the first location for one zman
/// * `b` - Entries of the second location for the same zman
///
/// # Returns
///
/// `AlwaysEarlier` or `AlwaysLater` when `a` is strictly on one side of `b`
/// on every shared date, otherwise `None`, plus the shared-date count.
pub fn relation_between(a: &[ComparisonEntry], b: &[ComparisonEntry]) -> (Relation, usize) {
    let b_by_date: HashMap<&str, DateTime<Utc>> =
        b.iter().map(|e| (e.date.as_str(), e.instant)).collect();

    let mut direction: Option<Ordering> = None;
    let mut shared = 0;

    for entry in a {
        let Some(other) = b_by_date.get(entry.date.as_str()) else {
            continue;
        };
        shared += 1;

        let ordering = entry.instant.cmp(other);
        if ordering == Ordering::Equal {
            return (Relation::None, shared);
        }
        match direction {
            None => direction = Some(ordering),
            Some(seen) if seen != ordering => return (Relation::None, shared),
            Some(_) => {}
        }
    }

    let relation = match direction {
        Some(Ordering::Less) => Relation::AlwaysEarlier,
        Some(Ordering::Greater) => Relation::AlwaysLater,
        _ => Relation::None,
    };
    (relation, shared)
}

/// Relation of the first location of a pair to the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairwiseRelation {
    pub first: String,
    pub first_index: usize,
    pub second: String,
    pub second_index: usize,
    pub relation: Relation,
    pub shared_dates: usize,
}

impl PairwiseRelation {
    /// `Jerusalem is always earlier than London`, or `None` when there is no
    /// directional claim to make.
    pub fn statement(&self) -> Option<String> {
        self.relation
            .is_directional()
            .then(|| format!("{} is {} than {}", self.first, self.relation, self.second))
    }
}

/// Relations for every unordered pair of distinct dataset locations.
///
/// Each pair is stored once with `first_index < second_index`; use
/// [`PairwiseRelations::relation`] to read it in either direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PairwiseRelations {
    pairs: Vec<PairwiseRelation>,
}

impl PairwiseRelations {
    pub fn compute(dataset: &LocationDataset, aggregation: &Aggregation) -> Self {
        let empty: &[ComparisonEntry] = &[];
        let entries_of = |index: usize| {
            aggregation
                .location_group(index)
                .map_or(empty, |g| g.entries.as_slice())
        };

        let mut pairs = Vec::new();
        for (i, first) in dataset.locations.iter().enumerate() {
            for (j, second) in dataset.locations.iter().enumerate().skip(i + 1) {
                let (relation, shared_dates) = relation_between(entries_of(i), entries_of(j));
                pairs.push(PairwiseRelation {
                    first: first.label.clone(),
                    first_index: i,
                    second: second.label.clone(),
                    second_index: j,
                    relation,
                    shared_dates,
                });
            }
        }

        Self { pairs }
    }

    pub fn pairs(&self) -> &[PairwiseRelation] {
        &self.pairs
    }

    /// Verdict of location `a` against location `b`, by dataset index.
    pub fn relation(&self, a: usize, b: usize) -> Relation {
        self.pairs
            .iter()
            .find_map(|p| {
                if p.first_index == a && p.second_index == b {
                    Some(p.relation)
                } else if p.first_index == b && p.second_index == a {
                    Some(p.relation.inverse())
                } else {
                    None
                }
            })
            .unwrap_or(Relation::None)
    }

    /// Pairs that carry a directional claim.
    pub fn directional(&self) -> impl Iterator<Item = &PairwiseRelation> {
        self.pairs.iter().filter(|p| p.relation.is_directional())
    }
}
