//! Numeric encoding of outcome status labels for modelling.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{Column, DataFrame};
use radprep_common::value_key;
use radprep_model::OutcomeSpec;
use tracing::{debug, warn};

use crate::error::{PrepError, Result};
use crate::frame::CohortFrame;
use crate::subset::column_keys;

/// Builds the outcome table for a clinical frame: the identifier column,
/// a `<status>_code` column of 0-based integer codes, and the untouched
/// follow-up column.
///
/// Codes follow the order of `status_values` when the specification gives
/// one; otherwise the distinct non-empty status values are coded in sorted
/// order. Status cells outside the coded set (including empty cells) come
/// through as nulls; non-empty ones are counted and reported with a
/// warning.
pub fn encode_outcomes(clinical: &CohortFrame, spec: &OutcomeSpec) -> Result<CohortFrame> {
    let status_keys = column_keys(clinical.data(), &spec.status_column)?;

    let order: Vec<String> = match &spec.status_values {
        Some(values) => values.iter().map(|value| value_key(value)).collect(),
        None => {
            let distinct: BTreeSet<&str> = status_keys
                .iter()
                .map(String::as_str)
                .filter(|key| !key.is_empty())
                .collect();
            distinct.into_iter().map(str::to_string).collect()
        }
    };
    let mapping: BTreeMap<&str, i64> = order
        .iter()
        .enumerate()
        .map(|(code, key)| (key.as_str(), code as i64))
        .collect();
    debug!(
        column = %spec.status_column,
        levels = order.len(),
        "Status levels mapped to codes"
    );

    let mut unmapped = 0usize;
    let codes: Vec<Option<i64>> = status_keys
        .iter()
        .map(|key| {
            let code = mapping.get(key.as_str()).copied();
            if code.is_none() && !key.is_empty() {
                unmapped += 1;
            }
            code
        })
        .collect();
    if unmapped > 0 {
        warn!(
            column = %spec.status_column,
            unmapped,
            "Status values outside the coded set were left null"
        );
    }

    let identifier = clinical.data().column(clinical.id_column())?.clone();
    let followup = clinical
        .data()
        .column(&spec.followup_column)
        .map_err(|_| PrepError::ColumnNotFound(spec.followup_column.clone()))?
        .clone();
    let code_column = Column::new(format!("{}_code", spec.status_column).into(), codes);

    let data = DataFrame::new(vec![identifier, code_column, followup])?;
    CohortFrame::new(data, clinical.id_column())
}
