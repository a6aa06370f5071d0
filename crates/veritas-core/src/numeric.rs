//! Numeric-string classification and conversion.
//!
//! Values arriving from forms, config files or user input are strings that
//! may or may not represent numbers. These helpers classify them without
//! failing; [`to_number`] is the strict counterpart that reports a typed
//! error instead.

use thiserror::Error;

/// Errors produced when converting a string to a number.
#[derive(Error, Debug, PartialEq)]
pub enum NumericError {
    #[error("value is not numeric: {0:?}")]
    NotNumeric(String),
}

/// Tells whether the given string represents a finite numeric value.
///
/// Surrounding whitespace is ignored, so `"  12.5 "` is numeric.
/// `"NaN"`, `"inf"` and the empty string are not.
pub fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// Tells whether the given string represents an integer value.
///
/// A value is an integer when it is numeric and carries no fractional
/// part in its textual form, so `"10"` is an integer but `"10.0"` is not.
pub fn is_integer(value: &str) -> bool {
    is_numeric(value) && !value.contains('.')
}

/// Convert the given string to a number, or report why it cannot be.
pub fn to_number(value: &str) -> Result<f64, NumericError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| NumericError::NotNumeric(value.to_string()))?;

    if !parsed.is_finite() {
        return Err(NumericError::NotNumeric(value.to_string()));
    }

    Ok(parsed)
}
