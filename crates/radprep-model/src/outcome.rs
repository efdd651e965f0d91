use serde::{Deserialize, Serialize};

/// Outcome-label encoding specification.
///
/// Describes how to derive the numeric outcome frame for survival-style
/// models from a clinical table: a status column to encode and a follow-up
/// column to carry over untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSpec {
    /// Clinical column holding the outcome status (e.g. `Status`, `Event`).
    pub status_column: String,
    /// Status values in the order they should be numbered (0-based).
    /// When absent, the distinct values found in the column are numbered
    /// in sorted order.
    #[serde(default)]
    pub status_values: Option<Vec<String>>,
    /// Clinical column holding the numeric follow-up length
    /// (e.g. days to last follow-up or death).
    pub followup_column: String,
}
