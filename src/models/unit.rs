//! Unit categories and their conversion factor tables.
//!
//! Each linear category maps a unit name to "how many of this unit make one
//! base unit" (meter, kilogram, liter, second, byte). Temperature has no
//! factor table and is converted through Celsius instead.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length factors relative to meter.
pub const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 0.001),
    ("centimeter", 100.0),
    ("millimeter", 1000.0),
    ("mile", 0.000_621_371),
    ("yard", 1.093_61),
    ("foot", 3.280_84),
    ("inch", 39.3701),
];

/// Weight factors relative to kilogram.
pub const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 1000.0),
    ("milligram", 1_000_000.0),
    ("pound", 2.204_62),
    ("ounce", 35.274),
    ("ton", 0.001),
];

/// Volume factors relative to liter.
pub const VOLUME_FACTORS: &[(&str, f64)] = &[
    ("liter", 1.0),
    ("milliliter", 1000.0),
    ("gallon", 0.264_172),
    ("quart", 1.056_69),
    ("pint", 2.113_38),
    ("cup", 4.226_75),
    ("fluid_ounce", 33.814),
];

/// Time factors relative to second.
pub const TIME_FACTORS: &[(&str, f64)] = &[
    ("second", 1.0),
    ("millisecond", 1000.0),
    ("minute", 1.0 / 60.0),
    ("hour", 1.0 / 3600.0),
    ("day", 1.0 / 86_400.0),
    ("week", 1.0 / 604_800.0),
    ("month", 1.0 / 2_629_746.0),
    ("year", 1.0 / 31_556_952.0),
];

/// Digital storage factors relative to byte (binary multiples).
pub const DIGITAL_FACTORS: &[(&str, f64)] = &[
    ("bit", 8.0),
    ("byte", 1.0),
    ("kilobyte", 1.0 / 1024.0),
    ("megabyte", 1.0 / 1_048_576.0),
    ("gigabyte", 1.0 / 1_073_741_824.0),
    ("terabyte", 1.0 / 1_099_511_627_776.0),
];

/// Temperature units, converted through Celsius.
pub const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

/// Category selecting which conversion table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// meter, kilometer, mile, ...
    Length,
    /// kilogram, gram, pound, ...
    Weight,
    /// celsius, fahrenheit, kelvin
    Temperature,
    /// liter, gallon, cup, ...
    Volume,
    /// second, minute, hour, ...
    Time,
    /// bit, byte, kilobyte, ...
    Digital,
}

impl UnitCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Volume,
        Self::Time,
        Self::Digital,
    ];

    /// Lowercase name used on the command line and in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
            Self::Time => "time",
            Self::Digital => "digital",
        }
    }

    /// Factor table for linear categories, `None` for temperature.
    #[must_use]
    pub const fn factors(self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Self::Length => Some(LENGTH_FACTORS),
            Self::Weight => Some(WEIGHT_FACTORS),
            Self::Volume => Some(VOLUME_FACTORS),
            Self::Time => Some(TIME_FACTORS),
            Self::Digital => Some(DIGITAL_FACTORS),
            Self::Temperature => None,
        }
    }

    /// Unit names available in this category, in table order.
    #[must_use]
    pub fn units(self) -> Vec<&'static str> {
        match self.factors() {
            Some(table) => table.iter().map(|(name, _)| *name).collect(),
            None => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Looks up the factor for `unit` in a linear category.
    #[must_use]
    pub fn factor(self, unit: &str) -> Option<f64> {
        self.factors()?
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// True if `unit` belongs to this category.
    #[must_use]
    pub fn contains(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown category '{s}'. Expected one of: length, weight, \
                     temperature, volume, time, digital"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!(" Digital ".parse::<UnitCategory>().unwrap(), UnitCategory::Digital);
        assert!("speed".parse::<UnitCategory>().is_err());
    }

    #[test]
    fn test_base_units_have_factor_one() {
        assert_eq!(UnitCategory::Length.factor("meter"), Some(1.0));
        assert_eq!(UnitCategory::Weight.factor("kilogram"), Some(1.0));
        assert_eq!(UnitCategory::Volume.factor("liter"), Some(1.0));
        assert_eq!(UnitCategory::Time.factor("second"), Some(1.0));
        assert_eq!(UnitCategory::Digital.factor("byte"), Some(1.0));
    }

    #[test]
    fn test_mile_factor_matches_table() {
        assert_eq!(UnitCategory::Length.factor("mile"), Some(0.000_621_371));
    }

    #[test]
    fn test_temperature_has_no_factors() {
        assert!(UnitCategory::Temperature.factors().is_none());
        assert_eq!(
            UnitCategory::Temperature.units(),
            vec!["celsius", "fahrenheit", "kelvin"]
        );
        assert!(UnitCategory::Temperature.contains("kelvin"));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(UnitCategory::Length.factor("furlong"), None);
        assert!(!UnitCategory::Weight.contains("meter"));
    }
}
