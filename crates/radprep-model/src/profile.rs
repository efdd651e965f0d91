use serde::{Deserialize, Serialize};

/// Per-column statistics reported by `radprep inspect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Polars dtype name as inferred on load.
    pub dtype: String,
    /// Whether the column carries a numeric dtype.
    pub is_numeric: bool,
    /// Count of non-null cells.
    pub non_null: usize,
    /// Count of distinct non-null values.
    pub distinct: usize,
    /// Fraction of cells that are null (1.0 for an empty table).
    pub null_ratio: f64,
    /// Distinct values over non-null cells (0.0 when the column is all null).
    pub unique_ratio: f64,
}
