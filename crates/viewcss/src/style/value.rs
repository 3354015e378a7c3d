//! Scalar value parsers shared by every property.
//!
//! Numbers are plain decimals (`12`, `-3`, `0.5`, `.5`). Exponents, `inf`,
//! `NaN` and a leading `+` are rejected even though `f64::from_str` accepts
//! them, because no stylesheet author means them.

use super::error::ValueError;

/// Parses a plain decimal number.
///
/// # Errors
///
/// [`ValueError::InvalidValue`] if `s` is not an optionally negative decimal
/// with an optional fractional part, or is too large to be finite.
pub fn parse_number(s: &str) -> Result<f64, ValueError> {
    let s = s.trim();
    let invalid = || ValueError::InvalidValue(s.to_string());

    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let valid = all_digits(int)
        && frac.map_or(true, all_digits)
        && !(int.is_empty() && frac.map_or(true, str::is_empty));
    if !valid {
        return Err(invalid());
    }

    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(invalid)
}

/// Parses a length in pixels: a number optionally suffixed with `px`.
///
/// # Errors
///
/// [`ValueError::InvalidValue`] for any other unit or a malformed number.
pub fn parse_pixels(s: &str) -> Result<f64, ValueError> {
    let s = s.trim();
    let number = s.strip_suffix("px").unwrap_or(s);
    parse_number(number).map_err(|_| ValueError::InvalidValue(s.to_string()))
}

/// Parses an opacity (`0.6` or `60%`), clamping out-of-range values into
/// `[0, 1]`.
pub fn parse_opacity(s: &str) -> Result<f64, ValueError> {
    let s = s.trim();
    let value = match s.strip_suffix('%') {
        Some(percent) => parse_number(percent)? / 100.0,
        None => parse_number(s)?,
    };
    if !(0.0..=1.0).contains(&value) {
        log::debug!("opacity {} clamped into [0, 1]", value);
    }
    Ok(value.clamp(0.0, 1.0))
}

/// Formats a number the shortest way that parses back to the same value.
///
/// Whole numbers drop the fractional part (`2`, not `2.0`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Formats a pixel length as `<number>px`.
pub fn format_pixels(value: f64) -> String {
    format!("{}px", format_number(value))
}
