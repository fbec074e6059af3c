//! Text <-> decimal conversion for form fields
//!
//! Field values are stored as text so that a half-typed value like `12.` or
//! an empty field survives a round trip. These helpers define how that text
//! is read as a number and how derived numbers are written back.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse field text as a decimal.
///
/// Reads the leading run of digits with at most one `.`, so `.5` is 0.5 and
/// `12.` is 12. Empty or unparseable text is 0. Digits beyond what a
/// `Decimal` can hold saturate at `Decimal::MAX` so range checks still see
/// an oversized value.
pub fn parse_number(text: &str) -> Decimal {
    let trimmed = text.trim_start();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    let digits = &trimmed[..end];
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    Decimal::from_str(&normalized).unwrap_or_else(|_| {
        // Only the integer part can overflow; drop the fraction before giving up
        let integer = normalized.split('.').next().unwrap_or_default();
        Decimal::from_str(integer).unwrap_or(Decimal::MAX)
    })
}

/// Format a derived value for storage in a field.
///
/// Zero becomes empty text so an untouched field never shows `0.00`.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    if value.is_zero() {
        return String::new();
    }
    to_fixed(value, decimals)
}

/// Format the result of a checked operation; `None` (overflow) is empty.
pub fn format_checked(value: Option<Decimal>, decimals: u32) -> String {
    value
        .map(|v| format_number(v, decimals))
        .unwrap_or_default()
}

/// Round half away from zero and pad to exactly `decimals` fractional digits.
pub fn to_fixed(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("88000"), dec!(88000));
        assert_eq!(parse_number("0.001"), dec!(0.001));
        assert_eq!(parse_number(".5"), dec!(0.5));
        assert_eq!(parse_number("12."), dec!(12));
        assert_eq!(parse_number(""), Decimal::ZERO);
        assert_eq!(parse_number("."), Decimal::ZERO);
        assert_eq!(parse_number("abc"), Decimal::ZERO);
        // Leading numeric prefix wins, like a lenient float parse
        assert_eq!(parse_number("12abc"), dec!(12));
        assert_eq!(parse_number("1.2.3"), dec!(1.2));
    }

    #[test]
    fn test_parse_number_saturates_oversized_integers() {
        let thirty_digits = format!("1{}", "0".repeat(29));
        assert_eq!(parse_number(&thirty_digits), Decimal::MAX);
        assert_eq!(parse_number(&"9".repeat(29)), Decimal::MAX);
        assert_eq!(parse_number(&format!("{thirty_digits}.25")), Decimal::MAX);

        // Largest representable integer still parses exactly
        assert_eq!(parse_number("79228162514264337593543950335"), Decimal::MAX);
        assert_eq!(parse_number(&"9".repeat(28)), Decimal::from_str(&"9".repeat(28)).unwrap());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec!(88), 2), "88.00");
        assert_eq!(format_number(dec!(0.001), 6), "0.001000");
        assert_eq!(format_number(Decimal::ZERO, 2), "");
        assert_eq!(format_number(dec!(87.6), 2), "87.60");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_number(dec!(0.0005681818), 6), "0.000568");
        assert_eq!(format_number(dec!(1.005), 2), "1.01");
        assert_eq!(format_number(dec!(1.004), 2), "1.00");
    }

    #[test]
    fn test_format_checked_overflow_is_empty() {
        assert_eq!(format_checked(None, 2), "");
        assert_eq!(format_checked(Some(dec!(5)), 2), "5.00");
    }

    #[test]
    fn test_to_fixed_keeps_zero() {
        assert_eq!(to_fixed(Decimal::ZERO, 6), "0.000000");
        assert_eq!(to_fixed(dec!(132), 2), "132.00");
    }
}
