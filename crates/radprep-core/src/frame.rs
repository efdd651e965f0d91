//! Identifier-indexed cohort tables.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use crate::error::{PrepError, Result};
use crate::features::feature_block_start;
use crate::subset::{SubsetCriteria, column_keys, subset_rows};

/// Column tokens that address the row-label axis instead of a physical
/// column. Matched literally; `INDEX` is an ordinary column name.
const INDEX_TOKENS: [&str; 2] = ["index", "Index"];

/// A table together with its designated patient-identifier column.
///
/// Wrapping a `DataFrame` in a `CohortFrame` is the re-indexing step of the
/// pipeline: the identifier column stays physically in the table but is
/// addressed as the row-label axis from then on. Row labels are the
/// canonical keys of that column, in row order; they are not required to be
/// unique.
///
/// Construction validates that the identifier column exists, which every
/// later operation relies on.
#[derive(Debug, Clone)]
pub struct CohortFrame {
    data: DataFrame,
    id_column: String,
}

impl CohortFrame {
    /// Wraps `data` with `id_column` as its row-label axis.
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` when `id_column` is not a column of `data`.
    pub fn new(data: DataFrame, id_column: impl Into<String>) -> Result<Self> {
        let id_column = id_column.into();
        if data.column(&id_column).is_err() {
            return Err(PrepError::ColumnNotFound(id_column));
        }
        Ok(Self { data, id_column })
    }

    /// The underlying table.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes the frame, returning the underlying table.
    pub fn into_data(self) -> DataFrame {
        self.data
    }

    /// Name of the identifier column serving as the row-label axis.
    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_count(&self) -> usize {
        self.data.width()
    }

    /// Canonical row labels in row order, duplicates preserved.
    pub fn row_labels(&self) -> Result<Vec<String>> {
        column_keys(&self.data, &self.id_column)
    }

    /// Distinct row labels.
    pub fn label_set(&self) -> Result<BTreeSet<String>> {
        Ok(self.row_labels()?.into_iter().collect())
    }

    /// Filters rows by `column` against the criteria.
    ///
    /// The literal tokens `index` / `Index` route the filter to the
    /// row-label axis; any other name must exist as a column. Behaves
    /// exactly like [`subset_rows`] otherwise.
    pub fn subset(&self, column: &str, criteria: &SubsetCriteria) -> Result<CohortFrame> {
        let target = if INDEX_TOKENS.contains(&column) {
            self.id_column.as_str()
        } else {
            column
        };
        let data = subset_rows(&self.data, target, criteria)?;
        Ok(Self {
            data,
            id_column: self.id_column.clone(),
        })
    }

    /// Keeps only rows whose row label is in `labels`.
    pub fn restrict_to_labels(&self, labels: &BTreeSet<String>) -> Result<CohortFrame> {
        self.subset("index", &SubsetCriteria::include(labels.iter()))
    }

    /// Reduces a feature export to the identifier column plus the genuine
    /// feature block.
    ///
    /// The positional boundary scan ignores the identifier column, so an
    /// id column named e.g. `patient_ID` ahead of the diagnostics block
    /// does not disturb the block search; the identifier is re-attached in
    /// front of the extracted columns.
    pub fn feature_block(&self) -> Result<CohortFrame> {
        let names: Vec<&str> = self
            .data
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .filter(|name| *name != self.id_column)
            .collect();
        let start = feature_block_start(&names)?;
        let mut selection: Vec<&str> = Vec::with_capacity(1 + names.len() - start);
        selection.push(self.id_column.as_str());
        selection.extend_from_slice(&names[start..]);
        let data = self.data.select(selection)?;
        Ok(Self {
            data,
            id_column: self.id_column.clone(),
        })
    }
}
