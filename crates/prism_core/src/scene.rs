//! Scene container and closest-hit queries.
//!
//! A scene is built once and then only read while rendering. Intersection
//! queries are a linear scan over every object; there is no acceleration
//! structure.

use prism_math::{ColorRgb, Ray};

use crate::{PointLight, RaycastHit, SceneObject};

/// Objects, point lights and ambient light making up a renderable scene.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
    lights: Vec<PointLight>,
    ambient: ColorRgb,
}

impl Scene {
    /// Create an empty scene with no ambient light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient light color.
    pub fn with_ambient(mut self, ambient: ColorRgb) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient(&self) -> ColorRgb {
        self.ambient
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the nearest object hit by `ray`.
    ///
    /// Returns `RaycastHit::NoHit` only when every object misses.
    pub fn find_closest_intersection(&self, ray: &Ray) -> RaycastHit<'_> {
        self.objects
            .iter()
            .fold(RaycastHit::NoHit, |closest, object| {
                closest.nearest(object.intersect(ray))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Plane, Sphere};
    use prism_math::Vector3;

    fn sphere(z: f64, radius: f64) -> Box<dyn SceneObject> {
        Box::new(Sphere::new(Vector3::new(0.0, 0.0, z), radius, Material::default()).unwrap())
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vector3::ZERO, Vector3::Z);

        assert!(!scene.find_closest_intersection(&ray).is_hit());
        assert_eq!(scene.ambient(), ColorRgb::BLACK);
    }

    #[test]
    fn test_closest_hit_is_minimum_of_individual_hits() {
        let mut scene = Scene::new();
        scene.add_object(sphere(20.0, 1.0));
        scene.add_object(sphere(5.0, 1.0));
        scene.add_object(sphere(10.0, 2.0));
        scene.add_object(Box::new(
            Plane::new(Vector3::new(0.0, 0.0, 30.0), Vector3::NEG_Z, Material::default()).unwrap(),
        ));

        let ray = Ray::new(Vector3::ZERO, Vector3::Z);
        let closest = scene.find_closest_intersection(&ray);

        let expected = scene
            .objects()
            .iter()
            .map(|object| object.intersect(&ray).distance())
            .fold(f64::INFINITY, f64::min);

        assert_eq!(closest.distance(), expected);
        assert!((closest.distance() - 4.0).abs() < 1e-9);

        let hit_object = closest.object().unwrap();
        assert!(std::ptr::addr_eq(hit_object, scene.objects()[1].as_ref()));
    }

    #[test]
    fn test_no_hit_iff_all_miss() {
        let mut scene = Scene::new();
        scene.add_object(sphere(5.0, 1.0));
        scene.add_object(sphere(10.0, 1.0));

        let away = Ray::new(Vector3::ZERO, Vector3::NEG_Z);
        assert!(scene
            .objects()
            .iter()
            .all(|object| !object.intersect(&away).is_hit()));
        assert!(!scene.find_closest_intersection(&away).is_hit());

        let toward = Ray::new(Vector3::ZERO, Vector3::Z);
        assert!(scene.find_closest_intersection(&toward).is_hit());
    }

    #[test]
    fn test_counts() {
        let mut scene = Scene::new().with_ambient(ColorRgb::splat(0.1));
        scene.add_object(sphere(5.0, 1.0));
        scene.add_light(PointLight::new(Vector3::Y, ColorRgb::WHITE, 10.0));

        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.ambient(), ColorRgb::splat(0.1));
    }
}
