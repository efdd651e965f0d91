use thiserror::Error;

/// Validation failures surfaced by the preparation core.
///
/// All variants are immediate, non-retryable errors: the operation aborts
/// without partial results and recovery (e.g. supplying an explicit
/// identifier) is the caller's concern.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("must provide include or exclude values for a subset")]
    MissingCriteria,

    #[error("column not found in table: {0}")]
    ColumnNotFound(String),

    #[error("no recognizable patient identifier column; pass the column name explicitly")]
    IdentifierNotFound,

    #[error("no diagnostics or original feature columns; cannot locate the start of the feature block")]
    FeatureBoundaryNotFound,

    #[error("dataframe error: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, PrepError>;
