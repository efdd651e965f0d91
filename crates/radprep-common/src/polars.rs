//! Polars `AnyValue` utility functions.
//!
//! Clinical spreadsheets and feature exports rarely agree on dtypes: the same
//! patient identifier may load as `Int64` from one file and `String` from
//! another, and a status flag may be `0`, `0.0` or `"0"` depending on the
//! exporting tool. Everything that compares cell contents in this workspace
//! therefore goes through [`value_key`], which folds those representations
//! into one canonical string.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its display `String`.
///
/// `Null` becomes the empty string and floats are printed without trailing
/// zeros, so `1.0` and `1` render identically.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use radprep_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(2.0)), "2");
/// assert_eq!(any_to_string(AnyValue::String("HN-001")), "HN-001");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
///
/// # Examples
///
/// ```
/// use radprep_common::format_numeric;
///
/// assert_eq!(format_numeric(3.0), "3");
/// assert_eq!(format_numeric(3.50), "3.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Canonical comparison key for a raw cell or criterion value.
///
/// Trims surrounding whitespace; values that parse as numbers are rendered
/// through [`format_numeric`] so `0`, `0.0` and `"0"` share one key.
/// Non-numeric text is kept as-is (case is significant, matching how the
/// source cohort sheets distinguish e.g. disease-site spellings).
///
/// # Examples
///
/// ```
/// use radprep_common::value_key;
///
/// assert_eq!(value_key(" 0.0 "), "0");
/// assert_eq!(value_key("007"), "7");
/// assert_eq!(value_key("RADCURE-0007"), "RADCURE-0007");
/// assert_eq!(value_key("train "), "train");
/// ```
pub fn value_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_f64(trimmed) {
        Some(number) => format_numeric(number),
        None => trimmed.to_string(),
    }
}

/// Canonical comparison key for a Polars cell.
///
/// Composition of [`any_to_string`] and [`value_key`]; nulls key as the
/// empty string.
pub fn any_to_key(value: AnyValue<'_>) -> String {
    value_key(&any_to_string(value))
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric cells.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an `AnyValue` to `i64`, truncating floats; `None` when the cell
/// holds no usable number.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => Some(v as i64),
        AnyValue::Float32(v) => Some(v as i64),
        AnyValue::Float64(v) => Some(v as i64),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Parses a trimmed string as `f64`; empty strings parse to `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a trimmed string as `i64`; empty strings parse to `None`.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
