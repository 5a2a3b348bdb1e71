//! Display formatting for numeric results.

/// Formats `value` with at most `decimals` decimal places, stripping
/// trailing zeros and a dangling decimal point.
///
/// ```
/// use minitools::services::format::format_number;
///
/// assert_eq!(format_number(0.001, 6), "0.001");
/// assert_eq!(format_number(212.0, 6), "212");
/// assert_eq!(format_number(1.0 / 3.0, 4), "0.3333");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // "-0" after rounding a tiny negative number
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
