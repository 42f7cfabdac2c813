use crate::error::{EvalError, EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a `usize` to `f64` if and only if it is exactly representable.
///
/// Returns `None` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use reckon::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(4), Some(4.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64_checked(value: usize) -> Option<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return None;
    }
    Some(value as f64)
}

/// Reads a number literal.
///
/// All whitespace is removed before parsing, so a literal the parser split as
/// `"1 000.5"` reads as `1000.5`.
///
/// ## Errors
/// Returns [`EvalError::InvalidNumber`] carrying the original text when the
/// remaining characters do not form a decimal floating-point number. Named
/// values such as `inf` or `NaN` are rejected.
///
/// ## Example
/// ```
/// use reckon::{error::EvalError, util::num::parse_literal};
///
/// assert_eq!(parse_literal(" 2.5e1 "), Ok(25.0));
/// assert_eq!(parse_literal("1 000"), Ok(1000.0));
/// assert!(matches!(parse_literal("1.2.3"), Err(EvalError::InvalidNumber { .. })));
/// assert!(matches!(parse_literal("inf"), Err(EvalError::InvalidNumber { .. })));
/// ```
pub fn parse_literal(raw: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidNumber { literal: raw.to_string() };

    let cleaned = raw.chars()
                     .filter(|c| !c.is_whitespace())
                     .collect::<String>();

    // `f64::from_str` also reads "inf" and "NaN", which are not literals.
    if !cleaned.bytes()
               .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return Err(invalid());
    }

    cleaned.parse::<f64>().map_err(|_| invalid())
}
