use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::debug;
use zmanim_core::parse::parse_date_key;
use zmanim_core::{Category, LocationDataset, dataset};

use crate::error::{CliError, CliResult};

pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_zmanim(s: &str) -> CliResult<Vec<String>> {
    let zmanim: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(str::to_string)
        .collect();

    if zmanim.is_empty() {
        return Err(CliError::input(format!(
            "Invalid zmanim '{}'. Expected a comma-separated list such as sunrise,sunset",
            s
        )));
    }
    Ok(zmanim)
}

pub fn parse_category(s: &str) -> CliResult<Category> {
    match s.to_lowercase().as_str() {
        "morning" => Ok(Category::Morning),
        "afternoon" => Ok(Category::Afternoon),
        "evening" => Ok(Category::Evening),
        "night" => Ok(Category::Night),
        _ => Err(CliError::input(format!(
            "Invalid category '{}'. Expected: morning, afternoon, evening, night",
            s
        ))),
    }
}

fn read_input(input: &str, stdin: bool) -> Result<String> {
    if stdin || input == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read dataset from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to open file '{input}'"))
    }
}

/// Read and parse the dataset named by `--input` / `--stdin`.
pub fn load_dataset(input: &str, stdin: bool) -> CliResult<LocationDataset> {
    let raw = read_input(input, stdin).map_err(|e| CliError::runtime(format!("{e:#}")))?;
    let dataset = dataset::from_json(&raw)?;
    debug!(locations = dataset.len(), input, "dataset loaded");
    Ok(dataset)
}

/// `2024-06-01` -> `June 1`; unparseable keys are shown as given.
pub fn display_date(key: &str) -> String {
    parse_date_key(key)
        .map(|date| date.format("%B %-d").to_string())
        .unwrap_or_else(|_| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zmanim_list_parsing() {
        assert_eq!(
            parse_zmanim(" sunrise, sunset ,,chatzot").unwrap(),
            vec!["sunrise", "sunset", "chatzot"]
        );
        assert!(parse_zmanim(" , ").is_err());
    }

    #[test]
    fn category_parsing() {
        assert_eq!(parse_category("Night").unwrap(), Category::Night);
        assert!(parse_category("dusk").is_err());
    }

    #[test]
    fn date_display() {
        assert_eq!(display_date("2024-06-01"), "June 1");
        assert_eq!(display_date("2024-12-25"), "December 25");
        assert_eq!(display_date("someday"), "someday");
    }
}
