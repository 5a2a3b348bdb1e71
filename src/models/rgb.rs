//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::HslColor;

/// Six hex digits with an optional leading `#`.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid")
});

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black, also the fallback for unparseable input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from unbounded channel values, clamping each to 0-255.
    #[must_use]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use minitools::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("3b82f6").unwrap();
    /// assert_eq!(color, RgbColor::new(59, 130, 246));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let Some(caps) = HEX_PATTERN.captures(hex) else {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (#RRGGBB)");
        };

        // The pattern guarantees two hex digits per group.
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
        Ok(Self::new(channel(1), channel(2), channel(3)))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use minitools::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a lowercase hex string ("#rrggbb").
    #[must_use]
    pub fn to_hex_lower(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(59, 130, 246)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL without rounding, so converting the
    /// result back lands on the same channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use minitools::models::{HslColor, RgbColor};
    ///
    /// let hsl = RgbColor::new(255, 0, 0).to_hsl();
    /// assert_eq!(hsl, HslColor::new(0.0, 100.0, 50.0));
    /// assert_eq!(RgbColor::new(59, 130, 246).to_hsl().rounded(), (217, 91, 60));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Grayscale, hue and saturation are undefined
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        HslColor::new(sector * 60.0, s * 100.0, l * 100.0)
    }

    /// Creates an `RgbColor` from HSL components.
    ///
    /// Hue wraps around 360, saturation and lightness are clamped to 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use minitools::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let to_channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(
            to_channel(h + 1.0 / 3.0),
            to_channel(h),
            to_channel(h - 1.0 / 3.0),
        )
    }

    /// WCAG 2.x relative luminance in 0.0-1.0.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio against another color (1.0-21.0).
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn readable_text_color(&self) -> Self {
        if self.contrast_ratio(&Self::BLACK) >= self.contrast_ratio(&Self::WHITE) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Lenient hex parsing: malformed input yields black instead of an error.
///
/// ```
/// use minitools::models::{hex_to_rgb, RgbColor};
///
/// assert_eq!(hex_to_rgb("#3b82f6"), RgbColor::new(59, 130, 246));
/// assert_eq!(hex_to_rgb("notacolor"), RgbColor::BLACK);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> RgbColor {
    RgbColor::from_hex(hex).unwrap_or(RgbColor::BLACK)
}

/// Formats channels as "#RRGGBB", clamping each to 0-255 first.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    RgbColor::from_clamped(r, g, b).to_hex()
}

/// Free-function form of [`RgbColor::to_hsl`].
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HslColor {
    RgbColor::new(r, g, b).to_hsl()
}

/// Free-function form of [`RgbColor::from_hsl`].
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    RgbColor::from_hsl(h, s, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: RgbColor, actual: RgbColor) {
        for (name, e, a) in [
            ("Red", expected.r, actual.r),
            ("Green", expected.g, actual.g),
            ("Blue", expected.b, actual.b),
        ] {
            assert!(
                (i16::from(e) - i16::from(a)).abs() <= 1,
                "{name} channel mismatch: {e} vs {a}"
            );
        }
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("##FFFFFF").is_err());
    }

    #[test]
    fn test_hex_to_rgb_lenient() {
        assert_eq!(hex_to_rgb("#3b82f6"), RgbColor::new(59, 130, 246));
        assert_eq!(hex_to_rgb("notacolor"), RgbColor::new(0, 0, 0));
        assert_eq!(hex_to_rgb(""), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#FF0000");
        assert_eq!(rgb_to_hex(300, -20, 15), "#FF000F");
        assert_eq!(RgbColor::new(59, 130, 246).to_hex_lower(), "#3b82f6");
    }

    #[test]
    fn test_to_hsl_primary_colors() {
        assert_eq!(rgb_to_hsl(255, 0, 0), HslColor::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 255, 0), HslColor::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 0, 255), HslColor::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_to_hsl_grayscale() {
        assert_eq!(rgb_to_hsl(0, 0, 0).rounded(), (0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255).rounded(), (0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128).rounded(), (0, 0, 50));
    }

    #[test]
    fn test_to_hsl_blue_500() {
        let hsl = rgb_to_hsl(59, 130, 246);
        assert_eq!(hsl.rounded(), (217, 91, 60));
        assert!(hsl.l > 59.5 && hsl.l < 60.0, "lightness kept unrounded: {}", hsl.l);
    }

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_clamping() {
        assert_eq!(hsl_to_rgb(0.0, 150.0, 150.0), RgbColor::WHITE);
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_roundtrip() {
        let colors = vec![
            RgbColor::new(59, 130, 246),
            RgbColor::new(255, 0, 0),
            RgbColor::new(255, 255, 0),
            RgbColor::new(200, 100, 50),
            RgbColor::new(128, 64, 192),
            RgbColor::new(17, 17, 17),
            RgbColor::new(250, 250, 250),
            RgbColor::new(2, 228, 230),
        ];

        for color in colors {
            let hsl = color.to_hsl();
            assert_close(color, hsl_to_rgb(hsl.h, hsl.s, hsl.l));
        }
    }

    #[test]
    fn test_hsl_roundtrip_across_rgb_cube() {
        let steps: Vec<u8> = (0..=255).step_by(3).collect();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let color = RgbColor::new(r, g, b);
                    assert_close(color, color.to_hsl().to_rgb());
                }
            }
        }
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let ratio = RgbColor::BLACK.contrast_ratio(&RgbColor::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert!((RgbColor::WHITE.contrast_ratio(&RgbColor::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(RgbColor::new(255, 255, 0).readable_text_color(), RgbColor::BLACK);
        assert_eq!(RgbColor::new(30, 30, 120).readable_text_color(), RgbColor::WHITE);
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(RgbColor::default(), RgbColor::new(0, 0, 0));
    }
}
