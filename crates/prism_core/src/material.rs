//! Phong surface material.

use prism_math::ColorRgb;
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// Phong material shared by every scene object.
///
/// Missing fields in a scene file take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse color (linear RGB)
    pub color: ColorRgb,

    /// Diffuse coefficient
    pub kd: f64,

    /// Specular coefficient
    pub ks: f64,

    /// Specular exponent
    pub alpha: f64,

    /// Fraction of light taken from the mirror reflection (0 = matte, 1 = mirror)
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: ColorRgb::WHITE,
            kd: 0.8,
            ks: 1.2,
            alpha: 10.0,
            reflectivity: 0.3,
        }
    }
}

impl Material {
    /// Create a material with the given diffuse color and default Phong terms.
    pub fn new(color: ColorRgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the Phong coefficients.
    pub fn with_phong(mut self, kd: f64, ks: f64, alpha: f64) -> Self {
        self.kd = kd;
        self.ks = ks;
        self.alpha = alpha;
        self
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Check that the reflectivity is a valid blend weight.
    pub fn validate(&self) -> SceneResult<()> {
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(SceneError::InvalidReflectivity(self.reflectivity));
        }
        Ok(())
    }
}
