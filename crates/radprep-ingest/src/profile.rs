//! Per-column statistics for loaded tables.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType};
use radprep_model::ColumnProfile;

use crate::error::Result;

/// Profiles every column of a loaded table.
///
/// The ratios mirror what identifier discovery cares about: identifier
/// columns tend toward a unique ratio near 1 with few nulls.
pub fn profile_columns(df: &DataFrame) -> Result<BTreeMap<String, ColumnProfile>> {
    let mut profiles = BTreeMap::new();
    let row_count = df.height();

    for column in df.get_columns() {
        let non_null = column.len() - column.null_count();
        let distinct = column.as_materialized_series().n_unique()?;
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            column.null_count() as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            distinct as f64 / non_null as f64
        };
        let is_numeric = matches!(
            column.dtype(),
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::Float32
                | DataType::Float64
        );

        profiles.insert(
            column.name().to_string(),
            ColumnProfile {
                dtype: column.dtype().to_string(),
                is_numeric,
                non_null,
                distinct,
                null_ratio,
                unique_ratio,
            },
        );
    }
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, DataFrame};

    use super::profile_columns;

    #[test]
    fn numeric_and_null_shares_are_reported() {
        let df = DataFrame::new(vec![
            Column::new("patient_id".into(), ["P-01", "P-02", "P-03"]),
            Column::new("Age".into(), vec![Some(61i64), None, Some(48)]),
        ])
        .expect("df");

        let profiles = profile_columns(&df).expect("profiles");
        let age = &profiles["Age"];
        assert!(age.is_numeric);
        assert_eq!(age.non_null, 2);
        assert!((age.null_ratio - 1.0 / 3.0).abs() < 1e-9);

        let id = &profiles["patient_id"];
        assert!(!id.is_numeric);
        assert_eq!(id.distinct, 3);
        assert!((id.unique_ratio - 1.0).abs() < 1e-9);
    }
}
