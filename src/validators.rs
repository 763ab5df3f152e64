//! Form field parsing for the length generators
//!
//! Numeric fields arrive as free text from the form or the command line.
//! Blank fields count as zero; anything else must parse as a decimal number.

use crate::core::error::{Error, Result};

/// Parses a numeric form field.
///
/// Surrounding whitespace is ignored. A blank field yields `0.0`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the text is not blank and not a number.
///
/// # Examples
///
/// ```
/// use cablegen::validators::parse_number_field;
///
/// assert_eq!(parse_number_field("route", " 1000 ").unwrap(), 1000.0);
/// assert_eq!(parse_number_field("route", "").unwrap(), 0.0);
/// assert!(parse_number_field("route", "12m").is_err());
/// ```
pub fn parse_number_field(field: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed.parse::<f64>().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        value: input.to_string(),
    })
}

/// Echoed measurement text; blank becomes `"0"`.
pub fn measurement_text(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!(parse_number_field("route", "1000").unwrap(), 1000.0);
        assert_eq!(parse_number_field("route", "12.5").unwrap(), 12.5);
        assert_eq!(parse_number_field("route", "+3").unwrap(), 3.0);
        assert_eq!(parse_number_field("route", "-4").unwrap(), -4.0);
        assert_eq!(parse_number_field("route", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_blank_defaults_to_zero() {
        assert_eq!(parse_number_field("slack", "").unwrap(), 0.0);
        assert_eq!(parse_number_field("slack", "   ").unwrap(), 0.0);
    }

    #[test]
    fn test_non_numeric_is_error() {
        let err = parse_number_field("route", "abc").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNumber {
                field: "route".to_string(),
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_units_suffix_rejected() {
        assert!(parse_number_field("route", "100 m").is_err());
        assert!(parse_number_field("route", "1,000").is_err());
    }

    #[test]
    fn test_measurement_text() {
        assert_eq!(measurement_text(""), "0");
        assert_eq!(measurement_text("  "), "0");
        assert_eq!(measurement_text(" 1.234 km "), "1.234 km");
    }
}
