pub mod align;
pub mod error;
pub mod features;
pub mod frame;
pub mod identifier;
pub mod outcome;
pub mod subset;

pub use align::{filter_and_align, split_by_groups};
pub use error::{PrepError, Result};
pub use features::{
    DIAGNOSTICS_PREFIX, ORIGINAL_FEATURE_PREFIX, extract_feature_block, feature_block_start,
};
pub use frame::CohortFrame;
pub use identifier::{identifier_candidates, resolve_identifier};
pub use outcome::encode_outcomes;
pub use subset::{SubsetCriteria, column_keys, filter_value_key, subset_rows};
