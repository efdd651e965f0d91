//! Positional extraction of the radiomic feature block.
//!
//! PyRadiomics-style exports prefix the computed features with a block of
//! `diagnostics_*` metadata columns (tool versions, image hashes, mask
//! geometry). Extraction is purely positional: once the boundary column is
//! located, everything from the boundary to the end of the table is a
//! feature, regardless of the individual column names.

use polars::prelude::DataFrame;

use crate::error::{PrepError, Result};

/// Prefix of diagnostic/metadata columns preceding the features.
pub const DIAGNOSTICS_PREFIX: &str = "diagnostics_";

/// Prefix of unfiltered-image feature columns, the first feature family in
/// exports that carry no diagnostics block.
pub const ORIGINAL_FEATURE_PREFIX: &str = "original_";

/// Position of the first genuine feature column within `names`.
///
/// Two-strategy fallback: after the last `diagnostics_*` column when any is
/// present, otherwise at the first `original_*` column. When neither prefix
/// family occurs the table cannot be disambiguated positionally and
/// [`PrepError::FeatureBoundaryNotFound`] is returned.
pub fn feature_block_start(names: &[&str]) -> Result<usize> {
    if let Some(position) = names
        .iter()
        .rposition(|name| name.starts_with(DIAGNOSTICS_PREFIX))
    {
        return Ok(position + 1);
    }
    names
        .iter()
        .position(|name| name.starts_with(ORIGINAL_FEATURE_PREFIX))
        .ok_or(PrepError::FeatureBoundaryNotFound)
}

/// Returns only the feature columns of a feature export.
///
/// See [`feature_block_start`] for the boundary rules. Note that this strips
/// every pre-boundary column including any identifier; use
/// `CohortFrame::feature_block` to keep the identifier attached.
pub fn extract_feature_block(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<&str> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    let start = feature_block_start(&names)?;
    Ok(df.select(names[start..].iter().copied())?)
}
