//! Patient-identifier column discovery.
//!
//! Column naming for the patient/case key is inconsistent across clinical
//! data sources (`patient_id`, `Pat ID`, `Case_ID`, `ID`, ...). Discovery
//! pattern-matches column names in two tiers: a strict family of
//! patient/case-id spellings first, then any name containing `id`. Every
//! consumer also accepts an explicit identifier column that bypasses the
//! heuristic.

use polars::prelude::DataFrame;
use regex::Regex;
use tracing::warn;

use crate::error::{PrepError, Result};

/// Strict spelling family: patient id, pat id, patid, case id, caseid,
/// case-insensitive with optional `_` or space separators, matched as a
/// substring of the column name.
const STRICT_IDENTIFIER_PATTERN: &str = r"(?i)pat(ient)?[_ ]?id|case[_ ]?id";

/// Fallback: any column name containing `id`.
const BROAD_IDENTIFIER_PATTERN: &str = r"(?i)id";

/// Column names that look like a patient/case identifier, in table order.
///
/// Strict-family matches win; the broad `id` fallback is consulted only when
/// no strict spelling is present.
pub fn identifier_candidates(df: &DataFrame) -> Vec<String> {
    let names: Vec<&str> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    let strict = matching_columns(&names, STRICT_IDENTIFIER_PATTERN);
    if !strict.is_empty() {
        return strict;
    }
    matching_columns(&names, BROAD_IDENTIFIER_PATTERN)
}

/// Resolves the single identifier column of a table.
///
/// Multiple candidates are not an error: the first match in existing column
/// order is used and a warning is emitted. Zero candidates fail with
/// [`PrepError::IdentifierNotFound`] since no operation can proceed without
/// knowing the identifier axis.
pub fn resolve_identifier(df: &DataFrame) -> Result<String> {
    let mut candidates = identifier_candidates(df);
    if candidates.len() > 1 {
        warn!(
            candidates = ?candidates,
            chosen = %candidates[0],
            "multiple identifier-like columns found; using the first"
        );
    }
    if candidates.is_empty() {
        return Err(PrepError::IdentifierNotFound);
    }
    Ok(candidates.remove(0))
}

fn matching_columns(names: &[&str], pattern: &str) -> Vec<String> {
    let Ok(re) = Regex::new(pattern) else {
        return Vec::new();
    };
    names
        .iter()
        .filter(|name| re.is_match(name))
        .map(|name| (*name).to_string())
        .collect()
}
