//! # Display Formatting
//!
//! Small text helpers shared by the converters and calculators.

/// Render `value` with `decimals` fractional digits, then drop trailing zeros
/// after the decimal point (and the point itself if nothing is left).
///
/// ```rust
/// use utilkit_core::format::format_trimmed;
///
/// assert_eq!(format_trimmed(100.0, 6), "100");
/// assert_eq!(format_trimmed(2.540000, 6), "2.54");
/// assert_eq!(format_trimmed(-0.0000001, 6), "0");
/// ```
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = strip_trailing_zeros(&fixed);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Strip zeros after a decimal point. Digits before the point are untouched.
pub fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Insert a comma between every group of three digits of an unsigned digit run.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to the nearest whole number and group thousands, e.g. `-1,234,568`.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_only_fraction() {
        assert_eq!(strip_trailing_zeros("100"), "100");
        assert_eq!(strip_trailing_zeros("100.000"), "100");
        assert_eq!(strip_trailing_zeros("0.500"), "0.5");
        assert_eq!(strip_trailing_zeros("10.05"), "10.05");
    }

    #[test]
    fn test_format_trimmed_preserves_value() {
        for value in [0.0, 1.0, 10.0, 1000.5, 0.125, 123456.789] {
            let text = format_trimmed(value, 6);
            let back: f64 = text.parse().unwrap();
            assert!((back - value).abs() < 1e-6, "{} -> {}", value, text);
        }
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(39_000_000.0), "39,000,000");
        assert_eq!(format_grouped(1234.5), "1,235");
        assert_eq!(format_grouped(-98765.4), "-98,765");
        assert_eq!(format_grouped(0.2), "0");
    }
}
