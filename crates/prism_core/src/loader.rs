//! JSON scene description loading.
//!
//! A scene file lists spheres, planes and point lights plus an optional
//! ambient light:
//!
//! ```json
//! {
//!   "ambient": 0.05,
//!   "lights": [{ "position": [0, 5, 2], "color": [1, 1, 1], "intensity": 200 }],
//!   "spheres": [{ "position": [0, 0, 6], "radius": 1, "color": [0.8, 0.2, 0.2] }],
//!   "planes": [{ "point": [0, -1, 0], "normal": [0, 1, 0], "reflectivity": 0 }]
//! }
//! ```
//!
//! Material fields (`color`, `kd`, `ks`, `alpha`, `reflectivity`) sit directly
//! on each object and fall back to [`Material::default`].

use std::fs;
use std::path::Path;

use prism_math::{ColorRgb, Vector3};
use serde::Deserialize;

use crate::{Material, Plane, PointLight, Scene, SceneResult, Sphere};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    #[serde(default)]
    ambient: AmbientDescription,
    #[serde(default)]
    lights: Vec<PointLight>,
    #[serde(default)]
    spheres: Vec<SphereDescription>,
    #[serde(default)]
    planes: Vec<PlaneDescription>,
}

/// Ambient light given either as a grey level or as an RGB triple.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmbientDescription {
    Grey(f64),
    Rgb(ColorRgb),
}

impl Default for AmbientDescription {
    fn default() -> Self {
        AmbientDescription::Grey(0.0)
    }
}

impl From<AmbientDescription> for ColorRgb {
    fn from(ambient: AmbientDescription) -> Self {
        match ambient {
            AmbientDescription::Grey(v) => ColorRgb::splat(v),
            AmbientDescription::Rgb(c) => c,
        }
    }
}

/// Material keys as they appear on an object, each optional.
///
/// Spelled out on every object description rather than flattening
/// [`Material`], since flattened fields escape `deny_unknown_fields` and a
/// misspelled key would silently fall back to its default.
fn material(
    color: Option<ColorRgb>,
    kd: Option<f64>,
    ks: Option<f64>,
    alpha: Option<f64>,
    reflectivity: Option<f64>,
) -> Material {
    let defaults = Material::default();
    Material {
        color: color.unwrap_or(defaults.color),
        kd: kd.unwrap_or(defaults.kd),
        ks: ks.unwrap_or(defaults.ks),
        alpha: alpha.unwrap_or(defaults.alpha),
        reflectivity: reflectivity.unwrap_or(defaults.reflectivity),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereDescription {
    position: Vector3,
    radius: f64,
    color: Option<ColorRgb>,
    kd: Option<f64>,
    ks: Option<f64>,
    alpha: Option<f64>,
    reflectivity: Option<f64>,
}

impl SphereDescription {
    fn material(&self) -> Material {
        material(self.color, self.kd, self.ks, self.alpha, self.reflectivity)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneDescription {
    point: Vector3,
    normal: Vector3,
    color: Option<ColorRgb>,
    kd: Option<f64>,
    ks: Option<f64>,
    alpha: Option<f64>,
    reflectivity: Option<f64>,
}

impl PlaneDescription {
    fn material(&self) -> Material {
        material(self.color, self.kd, self.ks, self.alpha, self.reflectivity)
    }
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Reading scene file {}", path.display());

    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let description: SceneDescription = serde_json::from_str(text)?;

    let mut scene = Scene::new().with_ambient(description.ambient.into());

    for sphere in description.spheres {
        scene.add_object(Box::new(Sphere::new(
            sphere.position,
            sphere.radius,
            sphere.material(),
        )?));
    }

    for plane in description.planes {
        scene.add_object(Box::new(Plane::new(plane.point, plane.normal, plane.material())?));
    }

    for light in description.lights {
        scene.add_light(light);
    }

    if scene.light_count() == 0 {
        log::warn!("Scene has no point lights; only ambient light will be visible");
    }

    log::info!(
        "Loaded scene with {} objects and {} lights",
        scene.object_count(),
        scene.light_count()
    );

    Ok(scene)
}
