//! # Numeric Parser
//!
//! Turns raw user text into numbers, radix-qualified integers and calendar
//! dates. Every function trims its input first and reports blank input as
//! [`ParseError::Empty`].
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::parse::{parse, parse_radix};
//!
//! assert_eq!(parse(" 12.5 ", None).unwrap(), 12.5);
//! assert_eq!(parse("ff", Some(16)).unwrap(), 255.0);
//! assert_eq!(parse_radix("777", 8).unwrap(), 511);
//! assert!(parse_radix("8", 8).is_err());
//! ```

use chrono::NaiveDate;

use crate::errors::ParseError;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits 0-9 then A-Z)
pub const MAX_RADIX: u32 = 36;

/// Parse a decimal number, or a radix-qualified integer when `radix` is given.
pub fn parse(raw: &str, radix: Option<u32>) -> Result<f64, ParseError> {
    match radix {
        Some(radix) => parse_radix(raw, radix).map(|value| value as f64),
        None => parse_decimal(raw),
    }
}

/// Parse a finite decimal floating-point number.
pub fn parse_decimal(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    // Rust's float parser accepts "inf" and "NaN"; those are not user numbers.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::not_a_number(trimmed)),
    }
}

/// Check that a radix lies in 2..=36.
pub fn check_radix(radix: u32) -> Result<(), ParseError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ParseError::UnsupportedRadix { radix })
    }
}

/// Parse a non-negative integer written in `radix`, case-insensitively.
///
/// A leading `-` is rejected as [`ParseError::NotANumber`]; any other
/// character outside the radix alphabet is [`ParseError::InvalidDigit`].
pub fn parse_radix(raw: &str, radix: u32) -> Result<u64, ParseError> {
    check_radix(radix)?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(ParseError::not_a_number(trimmed));
    }

    let mut value: u64 = 0;
    for ch in trimmed.chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or(ParseError::InvalidDigit { digit: ch, radix })?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| ParseError::Overflow {
                input: trimmed.to_string(),
                radix,
            })?;
    }

    Ok(value)
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate {
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(parse_decimal("   "), Err(ParseError::Empty));
        assert_eq!(parse_radix("", 2), Err(ParseError::Empty));
        assert_eq!(parse_date("\t"), Err(ParseError::Empty));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_decimal("42").unwrap(), 42.0);
        assert_eq!(parse_decimal("  -3.25\n").unwrap(), -3.25);
        assert_eq!(parse_decimal("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_decimal_rejects_non_finite() {
        assert!(matches!(parse_decimal("abc"), Err(ParseError::NotANumber { .. })));
        assert!(matches!(parse_decimal("inf"), Err(ParseError::NotANumber { .. })));
        assert!(matches!(parse_decimal("NaN"), Err(ParseError::NotANumber { .. })));
        assert!(matches!(parse_decimal("1e999"), Err(ParseError::NotANumber { .. })));
    }

    #[test]
    fn test_radix_digits() {
        assert_eq!(parse_radix("1010", 2).unwrap(), 10);
        assert_eq!(parse_radix("FF", 16).unwrap(), 255);
        assert_eq!(parse_radix("ff", 16).unwrap(), 255);
        assert_eq!(parse_radix("zz", 36).unwrap(), 1295);
    }

    #[test]
    fn test_radix_invalid_digit() {
        assert_eq!(
            parse_radix("178", 8),
            Err(ParseError::InvalidDigit { digit: '8', radix: 8 })
        );
        assert_eq!(
            parse_radix("12", 2),
            Err(ParseError::InvalidDigit { digit: '2', radix: 2 })
        );
        assert!(matches!(parse_radix("+5", 10), Err(ParseError::InvalidDigit { .. })));
        assert!(matches!(parse_radix("1.5", 10), Err(ParseError::InvalidDigit { .. })));
    }

    #[test]
    fn test_radix_negative_is_not_a_number() {
        assert!(matches!(parse_radix("-5", 10), Err(ParseError::NotANumber { .. })));
    }

    #[test]
    fn test_radix_bounds_and_overflow() {
        assert_eq!(parse_radix("1", 1), Err(ParseError::UnsupportedRadix { radix: 1 }));
        assert_eq!(parse_radix("1", 37), Err(ParseError::UnsupportedRadix { radix: 37 }));
        assert_eq!(parse_radix("18446744073709551615", 10).unwrap(), u64::MAX);
        assert!(matches!(
            parse_radix("18446744073709551616", 10),
            Err(ParseError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_with_optional_radix() {
        assert_eq!(parse("10", Some(2)).unwrap(), 2.0);
        assert_eq!(parse("10", None).unwrap(), 10.0);
    }

    #[test]
    fn test_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(parse_date("2023-02-29"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_date("29/02/2024"), Err(ParseError::InvalidDate { .. })));
    }
}
