//! CSV table loading built on the Polars reader.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::header::detect_header_line;

/// Options controlling how a table file is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Zero-based physical row of the header. When absent the first rows
    /// are probed and the most header-like one is chosen.
    pub header_row: Option<usize>,
}

impl LoadOptions {
    pub fn with_header_row(mut self, row: usize) -> Self {
        self.header_row = Some(row);
        self
    }
}

/// Reads a CSV file into a `DataFrame` with dtype inference.
///
/// Banner rows above the header are skipped (see
/// [`crate::header::detect_header_row`]) and header names are normalized:
/// BOM stripped, surrounding whitespace removed, internal whitespace runs
/// collapsed to single spaces.
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let skip_rows = match options.header_row {
        Some(row) => row,
        None => detect_header_line(path)?,
    };
    if skip_rows > 0 {
        debug!(path = %path.display(), skip_rows, "Skipping rows above the header");
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(skip_rows)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    normalize_headers(&mut df)?;

    if df.height() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}

/// Collapses whitespace runs and strips any BOM from a raw header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_headers(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        let normalized = normalize_header(&name);
        if normalized != name {
            df.rename(&name, normalized.into())?;
        }
    }
    Ok(())
}
