//! HSL color representation.

// Rounded components are range-checked before narrowing
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::fmt;

use super::RgbColor;

/// Hue/saturation/lightness triple kept at full precision.
///
/// - `h`: hue in degrees, 0.0 up to (not including) 360.0
/// - `s`: saturation percentage, 0.0-100.0
/// - `l`: lightness percentage, 0.0-100.0
///
/// Components are only rounded for display, see [`HslColor::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslColor {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl HslColor {
    /// Creates a new `HslColor`, wrapping hue into 0-360 and clamping s/l to 0-100.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Returns this color with the hue rotated by `degrees` (may be negative).
    #[must_use]
    pub fn rotate(&self, degrees: i32) -> Self {
        Self::new(self.h + f64::from(degrees), self.s, self.l)
    }

    /// Returns this color with a different lightness.
    #[must_use]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Whole degrees and percentages, as shown to users.
    ///
    /// ```
    /// use minitools::models::HslColor;
    ///
    /// assert_eq!(HslColor::new(359.6, 91.2, 59.8).rounded(), (0, 91, 60));
    /// ```
    #[must_use]
    pub fn rounded(&self) -> (u16, u8, u8) {
        let h = (self.h.round() as u16) % 360;
        (h, self.s.round() as u8, self.l.round() as u8)
    }

    /// Converts back to RGB.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(self.h, self.s, self.l)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        assert_eq!(
            HslColor::new(360.0, 120.0, 101.0),
            HslColor::new(0.0, 100.0, 100.0)
        );
        assert_eq!(HslColor::new(-90.0, -5.0, 50.0).h, 270.0);
        assert_eq!(HslColor::new(-90.0, -5.0, 50.0).s, 0.0);
    }

    #[test]
    fn test_rotate_wraps() {
        let base = HslColor::new(350.0, 50.0, 50.0);
        assert_eq!(base.rotate(30).h, 20.0);
        assert_eq!(base.rotate(-360).h, 350.0);
        assert_eq!(HslColor::new(10.0, 50.0, 50.0).rotate(-30).h, 340.0);
    }

    #[test]
    fn test_rotate_keeps_fraction() {
        let base = HslColor::new(217.25, 91.2, 59.8);
        let rotated = base.rotate(120);
        assert!((rotated.h - 337.25).abs() < 1e-9);
        assert_eq!(rotated.s, 91.2);
    }

    #[test]
    fn test_rounded_wraps_hue() {
        assert_eq!(HslColor::new(359.5, 0.4, 99.5).rounded(), (0, 0, 100));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HslColor::new(217.2, 91.2, 59.8).to_string(),
            "hsl(217, 91%, 60%)"
        );
    }
}
