//! Flat tab-separated export.
//!
//! Layout: a header `Date\tLocation\t<zman label>...`, then one row per date
//! (ascending) and location (dataset order). Cells without a value hold `-`.

use std::collections::HashMap;

use crate::catalog::zman_label;
use crate::models::LocationDataset;
use crate::normalize::normalize;
use crate::tz::{LocalTimeFormat, TwelveHourClock};

/// Placeholder for a missing or unusable value.
pub const MISSING_CELL: &str = "-";

/// One row of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub location: String,
    /// One cell per selected zman, in selection order.
    pub cells: Vec<String>,
}

/// Header line plus rows, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZmanimTable {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ZmanimTable {
    /// Build the table for `zmanim`, rendering times with `format`.
    pub fn build<S, F>(dataset: &LocationDataset, zmanim: &[S], format: &F) -> Self
    where
        S: AsRef<str>,
        F: LocalTimeFormat + ?Sized,
    {
        // (zman position, location index, date) -> local time
        let mut cells: HashMap<(usize, usize, String), String> = HashMap::new();
        for (zman_pos, zman) in zmanim.iter().enumerate() {
            for entry in normalize(dataset, zman.as_ref(), format) {
                cells.insert((zman_pos, entry.location_index, entry.date), entry.local_time);
            }
        }

        let header = ["Date", "Location"]
            .into_iter()
            .map(str::to_string)
            .chain(zmanim.iter().map(|z| zman_label(z.as_ref()).to_string()))
            .collect();

        let mut rows = Vec::new();
        for date in dataset.dates_for(zmanim) {
            for (location_index, location) in dataset.locations.iter().enumerate() {
                let cells = (0..zmanim.len())
                    .map(|zman_pos| {
                        cells
                            .get(&(zman_pos, location_index, date.clone()))
                            .cloned()
                            .unwrap_or_else(|| MISSING_CELL.to_string())
                    })
                    .collect();
                rows.push(TableRow {
                    date: date.clone(),
                    location: location.label.clone(),
                    cells,
                });
            }
        }

        Self { header, rows }
    }

    /// Render as tab-separated text, every line terminated by `\n`.
    pub fn to_tsv(&self) -> String {
        let mut out = self.header.join("\t");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.date);
            out.push('\t');
            out.push_str(&row.location);
            for cell in &row.cells {
                out.push('\t');
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }
}

/// Tab-separated export with the 12-hour clock.
///
/// ```
/// use zmanim_core::prelude::*;
///
/// let dataset = LocationDataset::new(vec![
///     Location::new("London", "Europe/London")
///         .with_time("sunrise", "2024-06-01", Some("2024-06-01T03:46:00Z")),
/// ]);
/// assert_eq!(
///     to_tsv(&dataset, &["sunrise", "sunset"]),
///     "Date\tLocation\tSunrise\tSunset\n2024-06-01\tLondon\t4:46 AM\t-\n"
/// );
/// ```
pub fn to_tsv<S: AsRef<str>>(dataset: &LocationDataset, zmanim: &[S]) -> String {
    ZmanimTable::build(dataset, zmanim, &TwelveHourClock).to_tsv()
}
