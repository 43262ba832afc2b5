//! Display text <-> `f64`
//!
//! `format_number` follows the ECMAScript `Number::toString` rules, which is
//! what a keypad calculator user expects to see: shortest round-trip digits,
//! plain notation for decimal exponents in `[-7, 21)`, exponential notation
//! with an explicit sign outside it, and `Infinity` / `NaN` for the special
//! values.

use crate::core::{CalcError, CalcResult};

/// Largest decimal exponent (exclusive, counted as digits before the point)
/// still written in plain notation
const PLAIN_MAX_EXPONENT: i32 = 21;

/// Smallest decimal exponent (exclusive) written as `0.000…ddd`
const PLAIN_MIN_EXPONENT: i32 = -6;

/// Formats a value the way it appears on the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0.0 too.
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // value = 0.d1d2…dk × 10^n
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= PLAIN_MAX_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= PLAIN_MAX_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if PLAIN_MIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Parses display text back into a value
///
/// Like a host `parseFloat`, the longest numeric prefix wins: `"12."` reads
/// as 12 and `"Infinity5"` as infinity. Text with no numeric prefix at all
/// is a [`CalcError::MalformedDisplay`].
pub fn parse_number(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(value);
    }

    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return Err(CalcError::MalformedDisplay(text.to_string()));
    }
    trimmed[..end]
        .parse::<f64>()
        .map_err(|_| CalcError::MalformedDisplay(text.to_string()))
}

/// Byte length of the longest prefix of `text` that is a float literal
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    for special in ["Infinity", "NaN"] {
        if text[pos..].starts_with(special) {
            return pos + special.len();
        }
    }

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            pos = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        while bytes.get(exp_pos).is_some_and(u8::is_ascii_digit) {
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            pos = exp_pos;
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== format_number tests =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(12.25), "12.25");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_small_plain_boundary() {
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(0.000_001_5), "0.0000015");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_large_plain_boundary() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(
            format_number(123_456_789_012_345_680_000.0),
            "123456789012345680000"
        );
    }

    #[test]
    fn test_format_extreme_magnitudes() {
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(format_number(5e-324), "5e-324");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    // ===== parse_number tests =====

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(parse_number("0"), Ok(0.0));
        assert_eq!(parse_number("123"), Ok(123.0));
        assert_eq!(parse_number("-4.5"), Ok(-4.5));
        assert_eq!(parse_number("0.000001"), Ok(0.000_001));
    }

    #[test]
    fn test_parse_trailing_decimal_point() {
        assert_eq!(parse_number("12."), Ok(12.0));
        assert_eq!(parse_number("0."), Ok(0.0));
    }

    #[test]
    fn test_parse_exponential() {
        assert_eq!(parse_number("1e+21"), Ok(1e21));
        assert_eq!(parse_number("1.5e-7"), Ok(1.5e-7));
    }

    #[test]
    fn test_parse_special_values() {
        assert_eq!(parse_number("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_longest_prefix() {
        assert_eq!(parse_number("Infinity5"), Ok(f64::INFINITY));
        assert_eq!(parse_number("1e-7."), Ok(1e-7));
        assert_eq!(parse_number("12.5abc"), Ok(12.5));
        assert_eq!(parse_number("3e"), Ok(3.0));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_number(""),
            Err(CalcError::MalformedDisplay(String::new()))
        );
        assert!(matches!(
            parse_number("."),
            Err(CalcError::MalformedDisplay(_))
        ));
        assert!(matches!(
            parse_number("abc"),
            Err(CalcError::MalformedDisplay(_))
        ));
        assert!(matches!(
            parse_number("-"),
            Err(CalcError::MalformedDisplay(_))
        ));
    }

    #[test]
    fn test_numeric_prefix_len() {
        assert_eq!(numeric_prefix_len("12.5x"), 4);
        assert_eq!(numeric_prefix_len("-Infinity!"), 9);
        assert_eq!(numeric_prefix_len(".x"), 0);
        assert_eq!(numeric_prefix_len("2e+"), 1);
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_format_parses_back_exactly(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let text = format_number(value);
            let parsed = parse_number(&text).unwrap();
            prop_assert_eq!(parsed, value);
        }

        #[test]
        fn prop_format_has_no_leading_zeros(value in 1.0f64..1e20) {
            let text = format_number(value);
            prop_assert!(!text.starts_with('0'));
        }

        #[test]
        fn prop_format_at_most_one_decimal_point(value in proptest::num::f64::NORMAL) {
            let text = format_number(value);
            prop_assert!(text.matches('.').count() <= 1);
        }
    }
}
