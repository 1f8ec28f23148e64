//! Point light source.

use std::f64::consts::PI;

use prism_math::{ColorRgb, Vector3};
use serde::{Deserialize, Serialize};

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointLight {
    pub position: Vector3,
    pub color: ColorRgb,
    pub intensity: f64,
}

impl PointLight {
    pub fn new(position: Vector3, color: ColorRgb, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Effective light color at `distance` from the light.
    ///
    /// The intensity is spread over a sphere of that radius (inverse-square
    /// falloff).
    pub fn illumination_at(&self, distance: f64) -> ColorRgb {
        self.color * (self.intensity / (4.0 * PI * distance * distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_square_falloff() {
        let light = PointLight::new(Vector3::ZERO, ColorRgb::WHITE, 4.0 * PI);

        assert!((light.illumination_at(1.0).r - 1.0).abs() < 1e-12);
        assert!((light.illumination_at(2.0).g - 0.25).abs() < 1e-12);
        assert!((light.illumination_at(10.0).b - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_color_is_preserved() {
        let light = PointLight::new(Vector3::ZERO, ColorRgb::new(1.0, 0.5, 0.0), 4.0 * PI);
        let at_one = light.illumination_at(1.0);

        assert!((at_one.g - 0.5).abs() < 1e-12);
        assert_eq!(at_one.b, 0.0);
    }
}
