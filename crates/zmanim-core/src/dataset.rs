//! Loading a [`LocationDataset`] from the calculation service's JSON.
//!
//! The input document is an array with one service response per location:
//!
//! ```json
//! [
//!   {
//!     "label": "Jerusalem",
//!     "location": { "name": "Jerusalem", "tzid": "Asia/Jerusalem" },
//!     "date": { "start": "2024-06-01", "end": "2024-06-02" },
//!     "times": { "sunrise": { "2024-06-01": "2024-06-01T05:33:00+03:00" } }
//!   }
//! ]
//! ```
//!
//! For single-day requests the service returns each zman as a bare timestamp
//! rather than a date map; those are keyed under `date.start`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ZmanimError};
use crate::models::{DailyTimes, Location, LocationDataset};

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceLocation {
    pub name: String,
    pub tzid: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Raw string handed to the normalizer for a JSON leaf value.
///
/// Integers keep their digits so they reach the epoch parser. Other
/// non-string values become text that fails timestamp parsing, so only that
/// one record is dropped downstream.
fn raw_timestamp(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// One location's response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResponse {
    /// Label the user typed; defaults to `location.name`.
    #[serde(default)]
    pub label: Option<String>,
    pub location: ServiceLocation,
    #[serde(default)]
    pub date: Option<DateRange>,
    /// Per zman: a date map, or one bare value for a single-day request.
    #[serde(default)]
    pub times: BTreeMap<String, Value>,
}

impl ServiceResponse {
    /// Convert into a [`Location`], expanding single-day values.
    pub fn into_location(self) -> Result<Location> {
        let label = self
            .label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(self.location.name);

        if self.location.tzid.trim().is_empty() {
            return Err(ZmanimError::InvalidDataset(format!(
                "location '{}' has no timezone",
                label
            )));
        }

        let mut times = BTreeMap::new();
        for (zman, value) in self.times {
            let daily: DailyTimes = match value {
                Value::Object(map) => map
                    .into_iter()
                    .map(|(date, raw)| (date, raw_timestamp(raw)))
                    .collect(),
                raw => {
                    let start = self.date.as_ref().map(|d| d.start.clone()).ok_or_else(|| {
                        ZmanimError::InvalidDataset(format!(
                            "location '{}': zman '{}' has a single value but no date range",
                            label, zman
                        ))
                    })?;
                    BTreeMap::from([(start, raw_timestamp(raw))])
                }
            };
            times.insert(zman, daily);
        }

        Ok(Location {
            label,
            timezone: self.location.tzid,
            times,
        })
    }
}

/// Build a dataset from already-deserialized responses.
pub fn from_responses(responses: Vec<ServiceResponse>) -> Result<LocationDataset> {
    if responses.is_empty() {
        return Err(ZmanimError::InvalidDataset(
            "dataset contains no locations".to_string(),
        ));
    }

    let locations = responses
        .into_iter()
        .map(ServiceResponse::into_location)
        .collect::<Result<Vec<_>>>()?;

    debug!(locations = locations.len(), "loaded dataset");
    Ok(LocationDataset::new(locations))
}

/// Parse a JSON array of service responses.
pub fn from_json(input: &str) -> Result<LocationDataset> {
    let responses: Vec<ServiceResponse> = serde_json::from_str(input)
        .map_err(|e| ZmanimError::InvalidDataset(format!("malformed JSON: {}", e)))?;
    from_responses(responses)
}
