//! Error types for zmanim-core.
//!
//! The comparison engine itself never fails: missing and malformed values are
//! dropped from the analysis. Errors only surface from the boundary helpers
//! that parse timezones, timestamps and datasets.

use thiserror::Error;

/// The main error type for zmanim operations.
#[derive(Debug, Error)]
pub enum ZmanimError {
    /// Invalid IANA timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Error parsing a timestamp or other scalar input.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The dataset document is structurally unusable.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Result type alias for zmanim operations.
pub type Result<T> = std::result::Result<T, ZmanimError>;
