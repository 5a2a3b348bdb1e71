//! Named color schemes built by rotating hue or stepping lightness.

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::{HslColor, RgbColor};

/// Lightness steps used by the monochromatic scheme.
const MONOCHROMATIC_LIGHTNESS: [f64; 5] = [20.0, 35.0, 50.0, 65.0, 80.0];

/// Kind of scheme to derive from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Base plus the opposite hue
    Complementary,
    /// Neighbours 30 degrees either side
    Analogous,
    /// Three hues 120 degrees apart
    Triadic,
    /// Four hues 90 degrees apart
    Tetradic,
    /// Same hue at several lightness levels
    Monochromatic,
}

impl ColorScheme {
    /// Every scheme, in display order.
    pub const ALL: [Self; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    /// Lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees; empty for monochromatic.
    const fn offsets(self) -> &'static [i32] {
        match self {
            Self::Complementary => &[0, 180],
            Self::Analogous => &[-30, 0, 30],
            Self::Triadic => &[0, 120, 240],
            Self::Tetradic => &[0, 90, 180, 270],
            Self::Monochromatic => &[],
        }
    }

    /// Generates the scheme's colors from `base`.
    #[must_use]
    pub fn generate(self, base: RgbColor) -> Vec<RgbColor> {
        let hsl = base.to_hsl();
        match self {
            Self::Monochromatic => MONOCHROMATIC_LIGHTNESS
                .iter()
                .map(|&l| hsl.with_lightness(l).to_rgb())
                .collect(),
            _ => self
                .offsets()
                .iter()
                .map(|&offset| rotated(base, hsl, offset))
                .collect(),
        }
    }
}

/// Offset zero keeps the exact base color instead of an HSL round trip.
fn rotated(base: RgbColor, hsl: HslColor, offset: i32) -> RgbColor {
    if offset == 0 {
        base
    } else {
        hsl.rotate(offset).to_rgb()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown scheme '{s}'. Expected one of: complementary, analogous, \
                     triadic, tetradic, monochromatic"
                )
            })
    }
}
