//! Sphere primitive.

use prism_math::{Ray, Vector3};

use crate::{HitRecord, Material, RaycastHit, SceneError, SceneObject, SceneResult};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails if the radius is not a positive finite number or the material's
    /// reflectivity is out of range.
    pub fn new(center: Vector3, radius: f64, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneObject for Sphere {
    fn intersect(&self, ray: &Ray) -> RaycastHit<'_> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let a = d.length_squared();
        let b = 2.0 * d.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Zero-length direction
        if a == 0.0 {
            return RaycastHit::NoHit;
        }

        let determinant = b * b - 4.0 * a * c;
        if determinant < 0.0 {
            return RaycastHit::NoHit;
        }

        let sqrt_det = determinant.sqrt();
        let near = (-b - sqrt_det) / (2.0 * a);
        let far = (-b + sqrt_det) / (2.0 * a);

        // Roots at or behind the origin are unusable. With the origin inside
        // the sphere only the far root survives and we report the exit point.
        let t = if near > 0.0 {
            near
        } else if far > 0.0 {
            far
        } else {
            return RaycastHit::NoHit;
        };

        // t is in units of |d|, so scale it back to a world-space distance.
        let location = ray.at(t);
        HitRecord {
            object: self,
            distance: t * a.sqrt(),
            location,
            normal: self.normal_at(location),
        }
        .into()
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sphere() -> Sphere {
        Sphere::new(Vector3::new(0.0, 0.0, 5.0), 1.0, Material::default()).unwrap()
    }

    fn expect_hit(hit: RaycastHit<'_>) -> HitRecord<'_> {
        match hit {
            RaycastHit::Hit(record) => record,
            RaycastHit::NoHit => panic!("expected a hit"),
        }
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = test_sphere();
        let ray = Ray::new(Vector3::ZERO, Vector3::Z);

        let record = expect_hit(sphere.intersect(&ray));
        assert!((record.distance - 4.0).abs() < 1e-9);
        assert!((record.location - Vector3::new(0.0, 0.0, 4.0)).length() < 1e-9);
        assert!((record.normal - Vector3::NEG_Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = test_sphere();

        // Pointing away
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);
        assert!(!sphere.intersect(&ray).is_hit());

        // Passing beside it
        let ray = Ray::new(Vector3::new(2.0, 0.0, 0.0), Vector3::Z);
        assert!(!sphere.intersect(&ray).is_hit());
    }

    #[test]
    fn test_origin_inside_reports_exit_point() {
        let sphere = test_sphere();
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::Y);

        let record = expect_hit(sphere.intersect(&ray));
        assert!((record.distance - 1.0).abs() < 1e-9);
        assert!((record.location - Vector3::new(0.0, 1.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn test_unnormalized_direction_is_consistent() {
        let sphere = test_sphere();
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 10.0));

        let record = expect_hit(sphere.intersect(&ray));
        assert!((record.distance - 4.0).abs() < 1e-9);
        assert!((record.location - Vector3::new(0.0, 0.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn test_round_trip_through_surface_point() {
        let sphere = Sphere::new(Vector3::new(1.0, -2.0, 8.0), 2.5, Material::default()).unwrap();
        let target = sphere.center() + Vector3::new(1.0, 1.0, -1.0).normalize() * sphere.radius();
        let origin = Vector3::new(-3.0, 4.0, -1.0);
        let ray = Ray::new(origin, (target - origin) * 0.37);

        let record = expect_hit(sphere.intersect(&ray));
        assert!((record.location - target).length() < 1e-9);
        assert!((record.distance - (target - origin).length()).abs() < 1e-9);

        let expected_normal = (target - sphere.center()).normalize();
        assert!(record.normal.cross(expected_normal).length() < 1e-9);
        assert!(record.normal.dot(expected_normal) > 0.0);
    }

    #[test]
    fn test_tangent_ray_hits_once() {
        let sphere = test_sphere();
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::Z);

        let record = expect_hit(sphere.intersect(&ray));
        assert!((record.location - Vector3::new(1.0, 0.0, 5.0)).length() < 1e-9);
    }

    #[test]
    fn test_zero_direction_misses() {
        let sphere = test_sphere();
        let ray = Ray::new(Vector3::ZERO, Vector3::ZERO);
        assert!(!sphere.intersect(&ray).is_hit());
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            Sphere::new(Vector3::ZERO, 0.0, Material::default()),
            Err(SceneError::InvalidRadius(_))
        ));
        assert!(Sphere::new(Vector3::ZERO, -1.0, Material::default()).is_err());
        assert!(Sphere::new(Vector3::ZERO, f64::NAN, Material::default()).is_err());
    }
}
