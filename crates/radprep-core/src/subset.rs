//! Row subsetting by include/exclude value sets.
//!
//! This is the primitive every higher-level preparation step builds on:
//! a pure, order-preserving filter of table rows against value sets for one
//! column. Cells and criteria are compared through canonical string keys
//! (see `radprep_common::value_key`), so a numeric column matches criteria
//! written as `0`, `0.0` or `"0"` alike.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use radprep_common::{any_to_key, format_numeric, value_key};
use radprep_model::FilterValue;

use crate::error::{PrepError, Result};

/// Include/exclude criteria for one subset pass.
///
/// Values are stored as canonical keys. At least one of the two sets must be
/// present by the time the criteria reach [`subset_rows`]; an unconstrained
/// criteria value is constructible (e.g. while folding over a configuration)
/// but not applicable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsetCriteria {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

impl SubsetCriteria {
    /// Criteria keeping only rows whose cell key is in `values`.
    pub fn include<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            include: Some(canonical_keys(values)),
            exclude: None,
        }
    }

    /// Criteria removing rows whose cell key is in `values`.
    pub fn exclude<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            include: None,
            exclude: Some(canonical_keys(values)),
        }
    }

    /// Adds an exclusion set to existing criteria.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = Some(canonical_keys(values));
        self
    }

    /// Builds criteria from configuration filter values.
    pub fn from_filter_values(
        include: Option<&[FilterValue]>,
        exclude: Option<&[FilterValue]>,
    ) -> Self {
        Self {
            include: include.map(|values| values.iter().map(filter_value_key).collect()),
            exclude: exclude.map(|values| values.iter().map(filter_value_key).collect()),
        }
    }

    /// True when neither include nor exclude values are present.
    pub fn is_unconstrained(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    pub fn include_keys(&self) -> Option<&[String]> {
        self.include.as_deref()
    }

    pub fn exclude_keys(&self) -> Option<&[String]> {
        self.exclude.as_deref()
    }
}

/// Canonical key for a configuration filter value.
pub fn filter_value_key(value: &FilterValue) -> String {
    match value {
        FilterValue::Text(text) => value_key(text),
        FilterValue::Number(number) => format_numeric(*number),
        FilterValue::Bool(flag) => flag.to_string(),
    }
}

/// Returns the rows of `df` whose value in `column` passes the criteria.
///
/// Inclusion is applied before exclusion; row order among kept rows matches
/// the input. Criteria values matching zero rows are not an error, so the
/// result may be empty.
///
/// # Errors
///
/// `MissingCriteria` when both value sets are absent, `ColumnNotFound` when
/// `column` is not in the table. A plain `DataFrame` has no row-label axis;
/// use `CohortFrame::subset` for `index`-token filtering.
pub fn subset_rows(df: &DataFrame, column: &str, criteria: &SubsetCriteria) -> Result<DataFrame> {
    if criteria.is_unconstrained() {
        return Err(PrepError::MissingCriteria);
    }
    let keys = column_keys(df, column)?;
    let include: Option<BTreeSet<&str>> = criteria
        .include
        .as_ref()
        .map(|values| values.iter().map(String::as_str).collect());
    let exclude: Option<BTreeSet<&str>> = criteria
        .exclude
        .as_ref()
        .map(|values| values.iter().map(String::as_str).collect());

    let keep: Vec<bool> = keys
        .iter()
        .map(|key| {
            let included = include
                .as_ref()
                .is_none_or(|set| set.contains(key.as_str()));
            let excluded = exclude
                .as_ref()
                .is_some_and(|set| set.contains(key.as_str()));
            included && !excluded
        })
        .collect();

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Canonical keys of every cell in `column`, in row order.
pub fn column_keys(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let series = df
        .column(column)
        .map_err(|_| PrepError::ColumnNotFound(column.to_string()))?;
    Ok((0..df.height())
        .map(|idx| any_to_key(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect())
}

fn canonical_keys<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value_key(value.as_ref()))
        .collect()
}
