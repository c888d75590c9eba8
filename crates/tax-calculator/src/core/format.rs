//! Display formatting for operands

/// Formats an operand string for display.
///
/// The integer part gets thousands grouping (`1234567` becomes `1,234,567`);
/// an unreadable integer part such as `""` or `"-"` shows as `0`. A fractional
/// part, even an empty one, is appended verbatim after `.` so that in-progress
/// input like `"12."` stays visible.
///
/// ```
/// use tax_calculator::core::format_number;
///
/// assert_eq!(format_number("1234567.89"), "1,234,567.89");
/// assert_eq!(format_number(""), "0");
/// ```
#[must_use]
pub fn format_number(value: &str) -> String {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };

    let int_display = group_integer(int_part).unwrap_or_else(|| "0".to_string());

    match frac_part {
        Some(frac) => format!("{int_display}.{frac}"),
        None => int_display,
    }
}

/// Groups an optionally signed integer string in threes with commas.
///
/// Returns `None` when the text is not an integer.
fn group_integer(int_part: &str) -> Option<String> {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    Some(grouped)
}
