//! # Base Converter
//!
//! Converts non-negative integers between positional bases 2 to 36 using the
//! digit alphabet `0-9A-Z`. Output is always uppercase; input is accepted in
//! either case.
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::bases::{from_base, to_base, format_binary_grouped, format_hex_prefixed};
//!
//! assert_eq!(to_base(255, 16).unwrap(), "FF");
//! assert_eq!(from_base("ff", 16).unwrap(), 255);
//! assert_eq!(format_binary_grouped(255), "1111 1111");
//! assert_eq!(format_hex_prefixed(255), "0xFF");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ParseError;
use crate::parse::{check_radix, parse_radix};

/// Digit alphabet shared by every radix; radix `r` uses the first `r` characters
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A radix together with its valid digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseSpec {
    pub radix: u32,
    pub label: &'static str,
    pub alphabet: &'static str,
}

impl BaseSpec {
    /// Describe base `radix`, or fail if it is outside 2..=36.
    pub fn new(radix: u32, label: &'static str) -> Result<Self, ParseError> {
        check_radix(radix)?;
        Ok(BaseSpec {
            radix,
            label,
            alphabet: &DIGITS[..radix as usize],
        })
    }

    /// Case-insensitive membership test
    pub fn is_valid_digit(&self, ch: char) -> bool {
        self.alphabet.contains(ch.to_ascii_uppercase())
    }

    /// True if every character of `text` belongs to the alphabet
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().all(|ch| self.is_valid_digit(ch))
    }
}

/// The bases shown side by side by [`convert_number`]
pub static STANDARD_BASES: Lazy<Vec<BaseSpec>> = Lazy::new(|| {
    [
        (2, "Binary"),
        (8, "Octal"),
        (10, "Decimal"),
        (16, "Hexadecimal"),
        (32, "Base-32"),
    ]
    .into_iter()
    .filter_map(|(radix, label)| BaseSpec::new(radix, label).ok())
    .collect()
});

/// Render `value` in `radix` with uppercase digits.
pub fn to_base(value: u64, radix: u32) -> Result<String, ParseError> {
    check_radix(radix)?;
    Ok(render(value, radix))
}

/// Parse a digit string written in `radix`.
pub fn from_base(digits: &str, radix: u32) -> Result<u64, ParseError> {
    parse_radix(digits, radix)
}

fn render(mut value: u64, radix: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let alphabet = DIGITS.as_bytes();
    let radix = u64::from(radix);
    let mut out = Vec::new();
    while value > 0 {
        out.push(char::from(alphabet[(value % radix) as usize]));
        value /= radix;
    }
    out.iter().rev().collect()
}

/// Canonical spelling of a digit string: uppercase, no leading zeros.
pub fn normalize(digits: &str) -> String {
    let upper = digits.trim().to_ascii_uppercase();
    let stripped = upper.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Binary digits split into 4-character clusters from the left.
pub fn format_binary_grouped(value: u64) -> String {
    let binary: Vec<char> = render(value, 2).chars().collect();
    binary
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase hexadecimal with a `0x` prefix.
pub fn format_hex_prefixed(value: u64) -> String {
    format!("0x{}", render(value, 16))
}

/// One entry of a multi-base conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRepresentation {
    pub radix: u32,
    pub label: String,
    pub digits: String,
}

/// A number shown in every standard base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConversion {
    /// Radix the input was written in
    pub from_radix: u32,
    /// Decimal value of the input
    pub value: u64,
    /// Representations in each standard base other than `from_radix`
    pub representations: Vec<BaseRepresentation>,
    /// Binary grouped in clusters of four, e.g. "1111 1111"
    pub binary_formatted: String,
    /// Hexadecimal with a `0x` prefix, e.g. "0xFF"
    pub hex_formatted: String,
}

impl NumberConversion {
    /// Digits for a given radix, if it was part of the conversion
    pub fn digits(&self, radix: u32) -> Option<&str> {
        self.representations
            .iter()
            .find(|r| r.radix == radix)
            .map(|r| r.digits.as_str())
    }
}

/// Parse `raw` in `from_radix` and render it in all the standard bases.
pub fn convert_number(raw: &str, from_radix: u32) -> Result<NumberConversion, ParseError> {
    let value = parse_radix(raw, from_radix)?;

    let representations = STANDARD_BASES
        .iter()
        .filter(|base| base.radix != from_radix)
        .map(|base| BaseRepresentation {
            radix: base.radix,
            label: base.label.to_string(),
            digits: render(value, base.radix),
        })
        .collect();

    debug!(from_radix, value, "number conversion");

    Ok(NumberConversion {
        from_radix,
        value,
        representations,
        binary_formatted: format_binary_grouped(value),
        hex_formatted: format_hex_prefixed(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_examples() {
        assert_eq!(to_base(255, 16).unwrap(), "FF");
        assert_eq!(from_base("ff", 16).unwrap(), 255);
        assert_eq!(from_base("FF", 16).unwrap(), 255);
    }

    #[test]
    fn test_zero_and_extremes() {
        assert_eq!(to_base(0, 2).unwrap(), "0");
        assert_eq!(to_base(35, 36).unwrap(), "Z");
        assert_eq!(to_base(u64::MAX, 16).unwrap(), "FFFFFFFFFFFFFFFF");
        assert_eq!(from_base("FFFFFFFFFFFFFFFF", 16).unwrap(), u64::MAX);
    }

    #[test]
    fn test_unsupported_radix() {
        assert_eq!(to_base(10, 1), Err(ParseError::UnsupportedRadix { radix: 1 }));
        assert_eq!(to_base(10, 40), Err(ParseError::UnsupportedRadix { radix: 40 }));
        assert!(BaseSpec::new(0, "none").is_err());
    }

    #[test]
    fn test_round_trip_every_radix() {
        let samples = [0u64, 1, 7, 35, 36, 255, 1_000, 65_535, 123_456_789, u64::MAX];
        for radix in 2..=36 {
            for &n in &samples {
                let digits = to_base(n, radix).unwrap();
                assert_eq!(from_base(&digits, radix).unwrap(), n, "radix {}", radix);
            }
        }
    }

    #[test]
    fn test_to_base_of_from_base_normalizes() {
        assert_eq!(to_base(from_base("00ff", 16).unwrap(), 16).unwrap(), normalize("00ff"));
        assert_eq!(to_base(from_base("000", 8).unwrap(), 8).unwrap(), normalize("000"));
        assert_eq!(to_base(from_base("zz", 36).unwrap(), 36).unwrap(), "ZZ");
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(from_base("-1", 10), Err(ParseError::NotANumber { .. })));
    }

    #[test]
    fn test_base_alphabet() {
        let octal = BaseSpec::new(8, "Octal").unwrap();
        assert_eq!(octal.alphabet, "01234567");
        assert!(octal.accepts("0755"));
        assert!(!octal.accepts("0758"));

        let hex = BaseSpec::new(16, "Hexadecimal").unwrap();
        assert!(hex.accepts("DeadBeef"));
        assert_eq!(hex.alphabet.len(), 16);
    }

    #[test]
    fn test_formatted_views() {
        assert_eq!(format_binary_grouped(0), "0");
        assert_eq!(format_binary_grouped(10), "1010");
        assert_eq!(format_binary_grouped(1023), "1111 1111 11");
        assert_eq!(format_hex_prefixed(0), "0x0");
        assert_eq!(format_hex_prefixed(48879), "0xBEEF");

        let stripped: String = format_binary_grouped(1023).split(' ').collect();
        assert_eq!(from_base(&stripped, 2).unwrap(), 1023);
    }

    #[test]
    fn test_convert_number() {
        let result = convert_number("255", 10).unwrap();
        assert_eq!(result.value, 255);
        assert_eq!(result.digits(2), Some("11111111"));
        assert_eq!(result.digits(8), Some("377"));
        assert_eq!(result.digits(16), Some("FF"));
        assert_eq!(result.digits(32), Some("7V"));
        assert_eq!(result.digits(10), None);
        assert_eq!(result.representations.len(), 4);
        assert_eq!(result.binary_formatted, "1111 1111");
        assert_eq!(result.hex_formatted, "0xFF");
    }

    #[test]
    fn test_convert_number_from_hex_includes_decimal() {
        let result = convert_number("1f", 16).unwrap();
        assert_eq!(result.value, 31);
        assert_eq!(result.digits(10), Some("31"));
        assert_eq!(result.digits(16), None);
    }

    #[test]
    fn test_convert_number_rejects_bad_digits() {
        assert_eq!(
            convert_number("129", 8),
            Err(ParseError::InvalidDigit { digit: '9', radix: 8 })
        );
        assert_eq!(convert_number("  ", 10), Err(ParseError::Empty));
    }
}
