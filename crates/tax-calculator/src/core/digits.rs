//! Digit-limit policy and canonical decimal strings
//!
//! Operands are stored as strings so in-progress input such as `"12."` or
//! `"0.50"` survives between keystrokes. Computed values go through
//! [`limit_digits`] which produces the canonical string form: plain
//! positional notation, no exponent, no trailing fractional zeros, and
//! `"0"` for both signed zeros.

use crate::core::{CalcError, CalcResult};

/// Counts the significant digits of an operand.
///
/// Sign and grouping separators are not digits; an empty operand has none.
#[must_use]
pub fn significant_digits(operand: &str) -> usize {
    operand.bytes().filter(u8::is_ascii_digit).count()
}

/// Reads an operand as a decimal number.
///
/// Accepts the forms keypad entry can produce (`"12"`, `"12."`, `".5"`,
/// `"-3.25"`). Empty strings, a lone `"."` and non-finite values are rejected.
pub fn parse_operand(operand: &str) -> CalcResult<f64> {
    operand
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::invalid_operand(operand))
}

/// Formats a value as its canonical decimal string.
#[must_use]
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Applies the digit limit to a computed value and returns its canonical string.
///
/// - Integer part longer than `max_digits`: keep its leading `max_digits`
///   digits and drop the fraction. This changes the magnitude of the value.
/// - Integer plus fraction longer than `max_digits`: round the fraction
///   half-up to the places left over.
/// - Otherwise the value is unchanged.
#[must_use]
pub fn limit_digits(value: f64, max_digits: usize) -> String {
    let text = canonical(value);
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, dec_part) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    let limited = if int_part.len() > max_digits {
        int_part[..max_digits].to_string()
    } else if int_part.len() + dec_part.len() > max_digits {
        round_half_up(int_part, dec_part, max_digits - int_part.len())
    } else {
        return text;
    };

    // Re-canonicalize so "100.0000000000" reads back as "100"
    let signed = format!("{sign}{limited}");
    signed.parse::<f64>().map(canonical).unwrap_or(signed)
}

/// Rounds `int_part.dec_part` half-up to `places` fractional digits.
fn round_half_up(int_part: &str, dec_part: &str, places: usize) -> String {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(dec_part.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = dec_part.as_bytes().get(places).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 1);
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
