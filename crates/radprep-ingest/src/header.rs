//! Header-row detection for CSV exports carrying banner rows.
//!
//! Spreadsheet exports often place a title or export note above the real
//! column header. Each probed row is scored on simple shape statistics and
//! the last header-like row before data starts wins; rows made of
//! identifier-style tokens (`patient_id`, no spaces) are preferred over
//! merely text-heavy ones.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Rows examined when probing for the header.
const PROBE_ROWS: usize = 5;

#[derive(Debug, Clone)]
struct ProbedRow {
    /// 1-based line number where the record starts.
    line: u64,
    cells: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
    identifier: usize,
}

impl RowStats {
    fn ratio(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    fn non_empty_ratio(self) -> f64 {
        Self::ratio(self.non_empty, self.total)
    }

    fn numeric_ratio(self) -> f64 {
        Self::ratio(self.numeric, self.total)
    }

    fn alpha_ratio(self) -> f64 {
        Self::ratio(self.alpha, self.total)
    }

    fn identifier_ratio(self) -> f64 {
        Self::ratio(self.identifier, self.total)
    }

    fn empty_ratio(self) -> f64 {
        1.0 - self.non_empty_ratio()
    }
}

fn row_stats(cells: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: cells.len(),
        ..RowStats::default()
    };
    for cell in cells {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_ascii_alphabetic()) {
            stats.alpha += 1;
        }
        if is_identifier_like(trimmed) {
            stats.identifier += 1;
        }
    }
    stats
}

fn is_identifier_like(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn is_data_like(stats: RowStats) -> bool {
    stats.numeric_ratio() >= 0.2 || stats.empty_ratio() >= 0.2
}

fn is_identifier_row(stats: RowStats) -> bool {
    stats.identifier_ratio() >= 0.6 && stats.numeric_ratio() <= 0.1
}

fn is_header_like(stats: RowStats) -> bool {
    stats.non_empty_ratio() >= 0.8 && stats.alpha_ratio() >= 0.5 && stats.numeric_ratio() <= 0.1
}

/// Index of the most plausible header row within `rows`.
///
/// Only the first [`PROBE_ROWS`] rows are considered. Falls back to the
/// first row when nothing qualifies, so callers always get a usable index.
pub fn detect_header_row(rows: &[Vec<String>]) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let stats: Vec<RowStats> = rows
        .iter()
        .take(PROBE_ROWS)
        .map(|row| row_stats(row))
        .collect();
    let data_start = stats.iter().position(|stat| is_data_like(*stat));
    let search_end = data_start.unwrap_or(1).max(1);

    let mut candidate = 0usize;
    let mut found_identifier_row = false;
    for (idx, stat) in stats.iter().enumerate().take(search_end) {
        if is_identifier_row(*stat) {
            candidate = idx;
            found_identifier_row = true;
        } else if !found_identifier_row && is_header_like(*stat) {
            candidate = idx;
        }
    }
    candidate
}

/// Number of physical lines to skip so the header lands first.
///
/// Works on line positions reported by the CSV reader, so blank banner
/// lines and quoted multi-line cells do not shift the result.
pub fn detect_header_line(path: &Path) -> Result<usize> {
    let rows = probe_rows(path)?;
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells.clone()).collect();
    let index = detect_header_row(&cells);
    Ok(rows
        .get(index)
        .map_or(0, |row| row.line.saturating_sub(1) as usize))
}

fn probe_rows(path: &Path) -> Result<Vec<ProbedRow>> {
    let file = File::open(path).map_err(|source| IngestError::file_read(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records().take(PROBE_ROWS) {
        let record = record.map_err(|source| IngestError::csv_parse(path, source))?;
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(ProbedRow {
            line,
            cells: record
                .iter()
                .map(|cell| cell.trim().trim_matches('\u{feff}').to_string())
                .collect(),
        });
    }
    Ok(rows)
}
