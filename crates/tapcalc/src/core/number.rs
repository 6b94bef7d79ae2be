//! Operand parsing and result formatting
//!
//! Results are shown with a fixed number of fractional digits, rounded half-up
//! on the shortest decimal representation of the `f64`. The stored form of a
//! result is that shortest representation with a mandatory fractional part, so
//! it always parses back to the same value.

use crate::core::{CalcError, CalcResult};

/// Fractional digits shown after equals
pub const DISPLAY_PLACES: usize = 3;

/// Parses an operand string as typed on the keypad
///
/// Accepts decimal literals such as `12`, `0.5`, `.5` and `5.`. Anything else,
/// including repeated decimal points, is rejected.
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let bytes = text.as_bytes();
    let body = bytes.strip_prefix(b"-").unwrap_or(bytes);
    let well_formed = !body.is_empty()
        && body.iter().any(u8::is_ascii_digit)
        && body.iter().all(|b| b.is_ascii_digit() || *b == b'.')
        && body.iter().filter(|b| **b == b'.').count() <= 1;

    if !well_formed {
        tracing::warn!(operand = text, "operand is not a decimal literal");
        return Err(CalcError::InvalidOperand(text.to_string()));
    }

    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

/// Formats a result with exactly `places` fractional digits
///
/// Rounding is half-up (away from zero) on the shortest round-trip decimal
/// form, so `1.0005` becomes `1.001`. The sign of negative zero is kept.
#[must_use]
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') && !round_up(&mut digits) {
        digits.insert(0, 1);
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// Adds one unit in the last place; returns false when the carry runs off the front
fn round_up(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return true;
        }
    }
    false
}

/// Formats a result for the display (three fractional digits)
#[must_use]
pub fn format_display(value: f64) -> String {
    format_fixed(value, DISPLAY_PLACES)
}

/// Stringifies a result for reuse as the next left operand
///
/// Integral values keep a `.0` suffix: `15.0`, `-3.0`. Exponent notation is
/// never used, so `1e7` is stored as `10000000.0`.
#[must_use]
pub fn stringify_result(value: f64) -> String {
    let repr = value.to_string();
    if repr.contains('.') || !value.is_finite() {
        repr
    } else {
        format!("{repr}.0")
    }
}
