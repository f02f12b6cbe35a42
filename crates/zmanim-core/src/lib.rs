//! # zmanim-core
//!
//! Timezone-aware comparison of zmanim (halachic daily time markers) across
//! several locations and dates.
//!
//! The library does not calculate zmanim. It takes timestamps already
//! produced by a calculation service, one IANA timezone per location, and
//! answers comparison questions about them.
//!
//! ## Pipeline
//!
//! - **Normalize**: drop null and malformed values, render each instant in its
//!   location's own zone ([`normalize`]).
//! - **Aggregate**: group entries by date and by location, ascending by
//!   absolute instant ([`aggregate`]).
//! - **Compare**: per-date rankings with time differences, per-location and
//!   overall extremes, and pairwise "always earlier/later" verdicts
//!   ([`compare`]).
//!
//! [`analyze`] runs all three for a selection of zmanim, and [`to_tsv`]
//! produces the flat tab-separated export.
//!
//! ## Example
//!
//! ```rust
//! use zmanim_core::prelude::*;
//!
//! let dataset = LocationDataset::new(vec![
//!     Location::new("New York", "America/New_York")
//!         .with_time("sunrise", "2024-06-01", Some("2024-06-01T10:30:00Z")),
//!     Location::new("Athens", "Europe/Athens")
//!         .with_time("sunrise", "2024-06-01", Some("2024-06-01T03:45:00Z")),
//! ]);
//!
//! let analysis = analyze(&dataset, &AnalysisOptions::new(&["sunrise"]));
//! let sunrise = analysis.zman("sunrise").unwrap();
//! let day = &sunrise.by_date[0];
//!
//! println!("Earliest: {} at {}", day.earliest.location, day.earliest.local_time);
//! println!("Latest: {} at {}", day.latest.location, day.latest.local_time);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod catalog;
pub mod compare;
pub mod dataset;
pub mod error;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod table;
pub mod tz;

// Re-export commonly used types at the crate root
pub use analysis::{Analysis, AnalysisOptions, ZmanAnalysis, analyze, analyze_with};
pub use catalog::{Category, ZMANIM_OPTIONS, ZmanOption, find_zman, zman_label};
pub use compare::{PairwiseRelation, PairwiseRelations, Relation, TimeDifference};
pub use error::{Result, ZmanimError};
pub use models::{ComparisonEntry, DateGroup, Location, LocationDataset, LocationGroup, ZmanRecord};
pub use table::{ZmanimTable, to_tsv};

/// Prelude module for convenient imports.
///
/// ```
/// use zmanim_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analysis::{Analysis, AnalysisOptions, ZmanAnalysis, analyze, analyze_with};
    pub use crate::catalog::{Category, ZMANIM_OPTIONS, ZmanOption, find_zman, zman_label};
    pub use crate::compare::*;
    pub use crate::error::{Result, ZmanimError};
    pub use crate::models::*;
    pub use crate::table::{ZmanimTable, to_tsv};
    pub use crate::tz::{LocalTimeFormat, TwelveHourClock, TwentyFourHourClock, parse_tz};
}
