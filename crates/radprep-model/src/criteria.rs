//! Filter and split specifications.
//!
//! Criteria are kept as ordered sequences of `(column, values)` pairs rather
//! than maps: the pipeline applies one column constraint at a time, each
//! narrowing the previous result, so application order is part of the
//! contract and must survive serialization.

use serde::{Deserialize, Serialize};

/// A scalar criterion value as written in a configuration file.
///
/// Untagged so that JSON `"train"`, `0` and `false` all deserialize
/// naturally. Comparison against table cells happens through canonical
/// string keys computed downstream, never through these variants directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Boolean criterion (`true` / `false`).
    Bool(bool),
    /// Numeric criterion; integers and floats both land here.
    Number(f64),
    /// Textual criterion.
    Text(String),
}

/// One column paired with the values selected from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnValues {
    /// Clinical column name (or the literal `index` token for row labels).
    pub column: String,
    /// Values to match within that column; order is preserved.
    pub values: Vec<FilterValue>,
}

impl ColumnValues {
    pub fn new(column: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self {
            column: column.into(),
            values,
        }
    }
}

/// Inclusion/exclusion criteria for the filter-and-align pipeline.
///
/// Within each list every entry must hold (conjunction); across the lists
/// inclusion is applied before exclusion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Rows must match one of the values in every listed column.
    #[serde(default)]
    pub include: Vec<ColumnValues>,
    /// Rows matching any value in a listed column are removed.
    #[serde(default)]
    pub exclude: Vec<ColumnValues>,
}

impl FilterSpec {
    /// True when neither inclusion nor exclusion criteria are present.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Grouped-split specification: each value of each listed column names one
/// output subgroup (e.g. `cohort: [train, test]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitSpec {
    #[serde(default)]
    pub columns: Vec<ColumnValues>,
}

impl SplitSpec {
    /// Total number of subgroups the specification produces.
    pub fn group_count(&self) -> usize {
        self.columns.iter().map(|entry| entry.values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|entry| entry.values.is_empty())
    }
}
