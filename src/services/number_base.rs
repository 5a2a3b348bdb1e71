//! Conversion between binary, octal, decimal, and hexadecimal.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported number bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 10
    Decimal,
    /// Base 16
    Hexadecimal,
}

impl NumberBase {
    /// Numeric radix.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Binary => Some("0b"),
            Self::Octal => Some("0o"),
            Self::Hexadecimal => Some("0x"),
            Self::Decimal => None,
        }
    }

    /// Parses a non-negative integer written in this base.
    ///
    /// Accepts the base's `0b`/`0o`/`0x` prefix and `_` or space separators.
    pub fn parse(self, input: &str) -> Result<u128> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let digits = match self.prefix() {
            Some(prefix) => cleaned.strip_prefix(prefix).unwrap_or(&cleaned),
            None => cleaned.as_str(),
        };

        if digits.is_empty() {
            anyhow::bail!("No digits in '{input}'");
        }

        u128::from_str_radix(digits, self.radix())
            .context(format!("'{input}' is not a valid {self} number"))
    }

    /// Formats a value in this base (lowercase digits, no prefix).
    #[must_use]
    pub fn format(self, value: u128) -> String {
        match self {
            Self::Binary => format!("{value:b}"),
            Self::Octal => format!("{value:o}"),
            Self::Decimal => value.to_string(),
            Self::Hexadecimal => format!("{value:x}"),
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

impl FromStr for NumberBase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(Self::Binary),
            "8" | "oct" | "octal" => Ok(Self::Octal),
            "10" | "dec" | "decimal" => Ok(Self::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Self::Hexadecimal),
            _ => anyhow::bail!("Unknown base '{s}'. Expected binary, octal, decimal, or hex"),
        }
    }
}

/// Converts `input` written in `from` into its representation in `to`.
///
/// ```
/// use minitools::services::number_base::{convert_base, NumberBase};
///
/// let bits = convert_base("ff", NumberBase::Hexadecimal, NumberBase::Binary).unwrap();
/// assert_eq!(bits, "11111111");
/// assert_eq!(convert_base("0b1010", NumberBase::Binary, NumberBase::Decimal).unwrap(), "10");
/// ```
pub fn convert_base(input: &str, from: NumberBase, to: NumberBase) -> Result<String> {
    Ok(to.format(from.parse(input)?))
}
