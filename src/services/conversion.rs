//! Unit conversion engine.
//!
//! Linear categories scale through their factor table; temperature goes
//! through Celsius. No rounding happens here; see [`super::format`] for
//! display formatting.

use anyhow::Result;
use std::fmt;

use crate::models::UnitCategory;

/// Result of converting raw user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionOutcome {
    /// The converted value
    Value(f64),
    /// The input was not a finite number
    InvalidInput,
}

impl ConversionOutcome {
    /// The converted value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::InvalidInput => None,
        }
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::InvalidInput => f.write_str("Invalid input"),
        }
    }
}

/// Converts `value` from one unit to another within `category`.
///
/// # Examples
///
/// ```
/// use minitools::models::UnitCategory;
/// use minitools::services::conversion::convert;
///
/// let km = convert(1.0, "meter", "kilometer", UnitCategory::Length).unwrap();
/// assert_eq!(km, 0.001);
///
/// let f = convert(100.0, "celsius", "fahrenheit", UnitCategory::Temperature).unwrap();
/// assert_eq!(f, 212.0);
/// ```
///
/// # Errors
///
/// Returns an error if either unit does not belong to `category`.
pub fn convert(value: f64, from: &str, to: &str, category: UnitCategory) -> Result<f64> {
    match category {
        UnitCategory::Temperature => {
            let celsius = to_celsius(value, from)?;
            from_celsius(celsius, to)
        }
        _ => {
            let from_factor = lookup_factor(category, from)?;
            let to_factor = lookup_factor(category, to)?;
            // Normalize to the base unit first so factors spanning many
            // orders of magnitude don't lose precision.
            Ok((value / from_factor) * to_factor)
        }
    }
}

/// Parses `input` and converts it, reporting non-numeric input as
/// [`ConversionOutcome::InvalidInput`] instead of propagating NaN.
///
/// # Errors
///
/// Returns an error only for units outside `category`.
pub fn convert_input(
    input: &str,
    from: &str,
    to: &str,
    category: UnitCategory,
) -> Result<ConversionOutcome> {
    // Check units before input so a bad unit is never masked by bad input.
    ensure_unit(category, from)?;
    ensure_unit(category, to)?;

    let Some(value) = parse_number(input) else {
        return Ok(ConversionOutcome::InvalidInput);
    };

    let result = convert(value, from, to, category)?;
    if result.is_finite() {
        Ok(ConversionOutcome::Value(result))
    } else {
        Ok(ConversionOutcome::InvalidInput)
    }
}

fn parse_number(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn ensure_unit(category: UnitCategory, unit: &str) -> Result<()> {
    if category.contains(unit) {
        Ok(())
    } else {
        anyhow::bail!(
            "Unknown unit '{unit}' for category {category}. Available: {}",
            category.units().join(", ")
        )
    }
}

fn lookup_factor(category: UnitCategory, unit: &str) -> Result<f64> {
    ensure_unit(category, unit)?;
    category
        .factor(unit)
        .ok_or_else(|| anyhow::anyhow!("Unit '{unit}' has no conversion factor"))
}

fn to_celsius(value: f64, unit: &str) -> Result<f64> {
    match unit {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - 273.15),
        _ => ensure_unit(UnitCategory::Temperature, unit).map(|()| value),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64> {
    match unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        _ => ensure_unit(UnitCategory::Temperature, unit).map(|()| celsius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= scale * 1e-9
    }

    #[test]
    fn test_meter_to_kilometer() {
        assert_eq!(
            convert(1.0, "meter", "kilometer", UnitCategory::Length).unwrap(),
            0.001
        );
    }

    #[test]
    fn test_meter_to_mile_uses_table_factor() {
        let miles = convert(1000.0, "meter", "mile", UnitCategory::Length).unwrap();
        assert!(approx_eq(miles, 0.621_371));
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let t = UnitCategory::Temperature;
        assert_eq!(convert(0.0, "celsius", "fahrenheit", t).unwrap(), 32.0);
        assert_eq!(convert(100.0, "celsius", "fahrenheit", t).unwrap(), 212.0);
        assert_eq!(convert(-40.0, "celsius", "fahrenheit", t).unwrap(), -40.0);
    }

    #[test]
    fn test_temperature_via_celsius_pivot() {
        let t = UnitCategory::Temperature;
        assert!(approx_eq(convert(212.0, "fahrenheit", "celsius", t).unwrap(), 100.0));
        assert!(approx_eq(convert(0.0, "kelvin", "celsius", t).unwrap(), -273.15));
        assert!(approx_eq(convert(32.0, "fahrenheit", "kelvin", t).unwrap(), 273.15));
        assert_eq!(convert(25.0, "kelvin", "kelvin", t).unwrap(), 25.0);
    }

    #[test]
    fn test_bytes_to_terabytes() {
        let tb = convert(
            1_099_511_627_776.0,
            "byte",
            "terabyte",
            UnitCategory::Digital,
        )
        .unwrap();
        assert!(approx_eq(tb, 1.0));
        assert_eq!(convert(1.0, "byte", "bit", UnitCategory::Digital).unwrap(), 8.0);
    }

    #[test]
    fn test_bits_and_terabytes_stay_exact() {
        let d = UnitCategory::Digital;
        let bits = convert(1.0, "terabyte", "bit", d).unwrap();
        assert_eq!(bits, 8_796_093_022_208.0);
        assert_eq!(convert(bits, "bit", "terabyte", d).unwrap(), 1.0);

        let tiny = convert(3.0, "bit", "terabyte", d).unwrap();
        assert!(tiny > 0.0);
        assert_eq!(convert(tiny, "terabyte", "bit", d).unwrap(), 3.0);
    }

    #[test]
    fn test_hours_to_minutes() {
        let minutes = convert(2.0, "hour", "minute", UnitCategory::Time).unwrap();
        assert!(approx_eq(minutes, 120.0));
    }

    #[test]
    fn test_linear_roundtrip_all_pairs() {
        let samples = [0.0, 1.0, 42.5, -3.25, 123_456.789];
        for category in UnitCategory::ALL {
            if category == UnitCategory::Temperature {
                continue;
            }
            let units = category.units();
            for a in &units {
                for b in &units {
                    for x in samples {
                        let there = convert(x, a, b, category).unwrap();
                        let back = convert(there, b, a, category).unwrap();
                        assert!(
                            approx_eq(back, x),
                            "{category}: {x} {a} -> {b} -> {a} gave {back}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_error() {
        assert!(convert(1.0, "meter", "gram", UnitCategory::Length).is_err());
        assert!(convert(1.0, "rankine", "celsius", UnitCategory::Temperature).is_err());
        assert!(convert(1.0, "celsius", "rankine", UnitCategory::Temperature).is_err());
    }

    #[test]
    fn test_convert_input_invalid() {
        let outcome = convert_input("abc", "meter", "foot", UnitCategory::Length).unwrap();
        assert_eq!(outcome, ConversionOutcome::InvalidInput);
        assert_eq!(outcome.to_string(), "Invalid input");

        let outcome = convert_input("", "meter", "foot", UnitCategory::Length).unwrap();
        assert_eq!(outcome, ConversionOutcome::InvalidInput);

        let outcome = convert_input("NaN", "meter", "foot", UnitCategory::Length).unwrap();
        assert_eq!(outcome, ConversionOutcome::InvalidInput);
    }

    #[test]
    fn test_convert_input_valid() {
        let outcome =
            convert_input(" 100 ", "celsius", "fahrenheit", UnitCategory::Temperature).unwrap();
        assert_eq!(outcome.value(), Some(212.0));
    }

    #[test]
    fn test_convert_input_bad_unit_beats_bad_input() {
        assert!(convert_input("abc", "meter", "parsec", UnitCategory::Length).is_err());
    }
}
