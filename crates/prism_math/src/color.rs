//! Linear RGB color.

use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A color in linear light space.
///
/// Channels are non-negative but not bounded to [0, 1]; clamping happens only
/// when converting to 8-bit display values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct ColorRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorRgb {
    pub const BLACK: ColorRgb = ColorRgb::splat(0.0);
    pub const WHITE: ColorRgb = ColorRgb::splat(1.0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with every channel set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Raise each channel to `exponent`.
    pub fn power(self, exponent: f64) -> Self {
        Self::new(
            self.r.powf(exponent),
            self.g.powf(exponent),
            self.b.powf(exponent),
        )
    }

    /// Component-wise reciprocal.
    pub fn inv(self) -> Self {
        Self::new(1.0 / self.r, 1.0 / self.g, 1.0 / self.b)
    }

    /// Convert to 8-bit display values, clamping each channel to [0, 1].
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Pack into a `0xRRGGBB` integer.
    pub fn to_packed_rgb(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    // NaN clamps to NaN and casts to 0
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

impl From<[f64; 3]> for ColorRgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<ColorRgb> for [f64; 3] {
    fn from(c: ColorRgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl Add for ColorRgb {
    type Output = ColorRgb;

    #[inline]
    fn add(self, rhs: ColorRgb) -> ColorRgb {
        ColorRgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Add<f64> for ColorRgb {
    type Output = ColorRgb;

    #[inline]
    fn add(self, rhs: f64) -> ColorRgb {
        self + ColorRgb::splat(rhs)
    }
}

impl AddAssign for ColorRgb {
    #[inline]
    fn add_assign(&mut self, rhs: ColorRgb) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for ColorRgb {
    type Output = ColorRgb;

    #[inline]
    fn mul(self, rhs: f64) -> ColorRgb {
        ColorRgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul for ColorRgb {
    type Output = ColorRgb;

    #[inline]
    fn mul(self, rhs: ColorRgb) -> ColorRgb {
        ColorRgb::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_arithmetic() {
        let a = ColorRgb::new(0.1, 0.2, 0.3);
        let b = ColorRgb::new(1.0, 2.0, 3.0);

        assert_eq!(a * 2.0, ColorRgb::new(0.2, 0.4, 0.6));
        assert_eq!(b * ColorRgb::splat(0.5), ColorRgb::new(0.5, 1.0, 1.5));
        assert_eq!(b + 1.0, ColorRgb::new(2.0, 3.0, 4.0));
        assert_eq!(b.inv(), ColorRgb::new(1.0, 0.5, 1.0 / 3.0));
        assert_eq!(b.power(2.0), ColorRgb::new(1.0, 4.0, 9.0));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(ColorRgb::new(-1.0, 0.5, 7.0).to_rgb8(), [0, 127, 255]);
        assert_eq!(ColorRgb::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(ColorRgb::BLACK.to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_packed_rgb() {
        assert_eq!(ColorRgb::new(1.0, 0.0, 0.0).to_packed_rgb(), 0xFF0000);
        assert_eq!(ColorRgb::new(0.0, 0.0, 1.0).to_packed_rgb(), 0x0000FF);
    }

    #[test]
    fn test_serde_as_array() {
        let c: ColorRgb = serde_json::from_str("[0.25, 0.5, 1.0]").unwrap();
        assert_eq!(c, ColorRgb::new(0.25, 0.5, 1.0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[0.25,0.5,1.0]");
    }
}
