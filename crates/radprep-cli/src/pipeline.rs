//! Shared plumbing between CLI commands.
//!
//! Each command composes the same stages: load a CSV table with header
//! detection, resolve its patient identifier, run the core alignment
//! operations, and write CSV outputs.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::{debug, info};

use radprep_core::{CohortFrame, resolve_identifier};
use radprep_ingest::{LoadOptions, load_table};
use radprep_model::RunConfig;

/// Load a table and index it by its patient identifier.
///
/// The identifier is taken from `explicit_id` when given, otherwise the
/// discovery heuristic picks a column by name. The header row is detected
/// unless `header_row` pins it.
pub fn load_cohort(
    path: &Path,
    explicit_id: Option<&str>,
    header_row: Option<usize>,
) -> Result<CohortFrame> {
    let mut options = LoadOptions::default();
    if let Some(row) = header_row {
        options = options.with_header_row(row);
    }
    let data = load_table(path, &options).with_context(|| format!("load {}", path.display()))?;
    let id_column = match explicit_id {
        Some(name) => name.to_string(),
        None => resolve_identifier(&data)
            .with_context(|| format!("resolve identifier in {}", path.display()))?,
    };
    info!(
        path = %path.display(),
        identifier = %id_column,
        records = data.height(),
        "table loaded"
    );
    CohortFrame::new(data, id_column).with_context(|| format!("index {}", path.display()))
}

/// Parse a JSON run configuration file.
pub fn load_run_config(path: &Path) -> Result<RunConfig> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: RunConfig =
        serde_json::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "run configuration loaded");
    Ok(config)
}

/// Write a cohort table as CSV with a header row.
pub fn write_cohort_csv(frame: &CohortFrame, path: &Path) -> Result<()> {
    let mut data = frame.data().clone();
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut data)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), records = data.height(), "csv written");
    Ok(())
}

/// File-name-safe version of a group key: lowercase alphanumeric runs
/// joined by single underscores, `"group"` when nothing survives.
pub fn sanitize_group_key(key: &str) -> String {
    let mut sanitized = String::with_capacity(key.len());
    let mut gap = false;
    for ch in key.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !sanitized.is_empty() {
                sanitized.push('_');
            }
            sanitized.push(ch.to_ascii_lowercase());
            gap = false;
        } else {
            gap = true;
        }
    }
    if sanitized.is_empty() {
        "group".to_string()
    } else {
        sanitized
    }
}
