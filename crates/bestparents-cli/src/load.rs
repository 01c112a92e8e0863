//! CSV → [`CategoricalDataset`].
//!
//! The first row names the attributes. Every cell is treated as a nominal
//! value; values are coded per column in order of first appearance.

use crate::output::{CliError, OutputMode, render_error};
use anyhow::{Context, Result, bail};
use bestparents_core::CategoricalDataset;
use std::path::Path;
use tracing::debug;

/// Read a headed CSV file into a dataset.
///
/// # Errors
///
/// Fails if the file cannot be read, has no header, or contains a record
/// whose width differs from the header's.
pub fn load_csv(path: &Path) -> Result<CategoricalDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let header: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();
    if header.is_empty() {
        bail!("{} has no header row", path.display());
    }

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let dataset = CategoricalDataset::from_records(header, records.iter().map(|r| r.iter()))?;
    debug!(
        path = %path.display(),
        attributes = dataset.attributes().len(),
        instances = records.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// [`load_csv`], reporting a failure in the requested output mode first.
///
/// # Errors
///
/// Returns the load error after it has been rendered to stderr.
pub fn load_or_report(path: &Path, output: OutputMode) -> Result<CategoricalDataset> {
    match load_csv(path) {
        Ok(data) => Ok(data),
        Err(e) => {
            render_error(output, &load_error(&e))?;
            Err(e)
        }
    }
}

fn load_error(err: &anyhow::Error) -> CliError {
    CliError::with_details(
        format!("{err:#}"),
        "check that the file exists and is a comma-separated table with one header row",
        "csv_unreadable",
    )
}
