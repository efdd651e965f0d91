//! CLI library components for radprep.

pub mod logging;
pub mod pipeline;
