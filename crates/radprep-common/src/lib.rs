//! Shared utilities for radprep crates.
//!
//! This crate provides common helpers used across the radprep workspace,
//! mainly conversions between Polars `AnyValue` cells and the canonical
//! string keys under which cells and filter criteria are compared.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    any_to_f64, any_to_i64, any_to_key, any_to_string, format_numeric, parse_f64, parse_i64,
    value_key,
};
