// src/core/parse.rs

//! Reads complex amplitudes from user-typed text.
//!
//! Accepted forms: a real number (`1`, `-0.5`, `2.5e-3`), a pure imaginary
//! (`2j`, `-j`, `0.5i`), or a real/imaginary sum (`0.6+0.8j`, `1-2i`),
//! optionally wrapped in one pair of parentheses. Surrounding whitespace is
//! ignored; whitespace inside the number is not.

use super::error::{QubitError, QubitResult};
use num_complex::Complex64;

/// Parses a complex number from text.
///
/// # Errors
/// Returns `QubitError::InputParse` on malformed syntax or non-finite parts.
pub fn parse_complex(text: &str) -> QubitResult<Complex64> {
    let mut body = text.trim();
    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        body = inner.trim();
    }
    if body.is_empty() {
        return Err(QubitError::parse(text, "empty input"));
    }

    let Some(without_unit) = body.strip_suffix(['j', 'J', 'i', 'I']) else {
        let re = parse_real(text, body)?;
        return Ok(Complex64::new(re, 0.0));
    };

    match split_at_imaginary_sign(without_unit) {
        Some(idx) => {
            let re = parse_real(text, &without_unit[..idx])?;
            let im = parse_imaginary_coefficient(text, &without_unit[idx..])?;
            Ok(Complex64::new(re, im))
        }
        None => {
            let im = parse_imaginary_coefficient(text, without_unit)?;
            Ok(Complex64::new(0.0, im))
        }
    }
}

/// Finds the sign that separates the real part from the imaginary part.
/// Signs at position 0 or directly after an exponent marker do not count.
fn split_at_imaginary_sign(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_imaginary_coefficient(original: &str, coefficient: &str) -> QubitResult<f64> {
    match coefficient {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        other => parse_real(original, other),
    }
}

fn parse_real(original: &str, part: &str) -> QubitResult<f64> {
    if part.is_empty() || part.chars().any(char::is_whitespace) {
        return Err(QubitError::parse(original, "malformed number"));
    }
    let value: f64 = part
        .parse()
        .map_err(|_| QubitError::parse(original, format!("'{}' is not a number", part)))?;
    if !value.is_finite() {
        return Err(QubitError::parse(original, "value must be finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Complex64 {
        match parse_complex(text) {
            Ok(c) => c,
            Err(e) => panic!("'{}' should parse: {}", text, e),
        }
    }

    #[test]
    fn test_real_forms() {
        assert_eq!(parsed("1"), Complex64::new(1.0, 0.0));
        assert_eq!(parsed("  -0.5 "), Complex64::new(-0.5, 0.0));
        assert_eq!(parsed("2.5e-3"), Complex64::new(2.5e-3, 0.0));
        assert_eq!(parsed("(3)"), Complex64::new(3.0, 0.0));
    }

    #[test]
    fn test_imaginary_forms() {
        assert_eq!(parsed("j"), Complex64::new(0.0, 1.0));
        assert_eq!(parsed("-j"), Complex64::new(0.0, -1.0));
        assert_eq!(parsed("2j"), Complex64::new(0.0, 2.0));
        assert_eq!(parsed("0.5i"), Complex64::new(0.0, 0.5));
        assert_eq!(parsed("1e-3J"), Complex64::new(0.0, 1e-3));
    }

    #[test]
    fn test_sum_forms() {
        assert_eq!(parsed("0.6+0.8j"), Complex64::new(0.6, 0.8));
        assert_eq!(parsed("1-2i"), Complex64::new(1.0, -2.0));
        assert_eq!(parsed("(1+j)"), Complex64::new(1.0, 1.0));
        assert_eq!(parsed("-1-j"), Complex64::new(-1.0, -1.0));
        assert_eq!(parsed("1e-3+2e+2j"), Complex64::new(1e-3, 200.0));
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        for bad in ["", "   ", "abc", "1+", "1 + 2j", "1+-2j", "j1", "()", "--1", "1..2"] {
            let result = parse_complex(bad);
            assert!(
                matches!(result, Err(QubitError::InputParse { .. })),
                "'{}' should be rejected, got {:?}",
                bad,
                result
            );
        }
    }

    #[test]
    fn test_non_finite_is_parse_error() {
        for bad in ["inf", "nan", "1+infj", "-infinity"] {
            assert!(matches!(parse_complex(bad), Err(QubitError::InputParse { .. })), "'{}'", bad);
        }
    }
}
