//! Specification types for the radprep pipeline.
//!
//! Plain data definitions with serde derives; no table engine dependency.
//! The core crate interprets these against loaded tables.

pub mod config;
pub mod criteria;
pub mod outcome;
pub mod profile;

pub use config::RunConfig;
pub use criteria::{ColumnValues, FilterSpec, FilterValue, SplitSpec};
pub use outcome::OutcomeSpec;
pub use profile::ColumnProfile;
