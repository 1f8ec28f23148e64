//! Infinite plane primitive.

use prism_math::{Ray, Vector3};

use crate::{HitRecord, Material, RaycastHit, SceneError, SceneObject, SceneResult};

/// Below this |D.N| the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// An infinite plane through `point` facing along `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vector3,
    normal: Vector3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vector3, normal: Vector3, material: Material) -> SceneResult<Self> {
        let normal = normal.normalize_or_zero();
        if normal == Vector3::ZERO {
            return Err(SceneError::DegenerateNormal);
        }
        material.validate()?;

        Ok(Self {
            point,
            normal,
            material,
        })
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl SceneObject for Plane {
    fn intersect(&self, ray: &Ray) -> RaycastHit<'_> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return RaycastHit::NoHit;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t <= 0.0 {
            return RaycastHit::NoHit;
        }

        let location = ray.at(t);
        HitRecord {
            object: self,
            distance: t * ray.direction().length(),
            location,
            normal: self.normal,
        }
        .into()
    }

    fn normal_at(&self, _point: Vector3) -> Vector3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 3.0, 0.0), Material::default()).unwrap()
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, -2.0, 0.0));

        match plane.intersect(&ray) {
            RaycastHit::Hit(record) => {
                assert!((record.distance - 1.0).abs() < 1e-12);
                assert_eq!(record.location, Vector3::new(0.0, -1.0, 0.0));
                assert_eq!(record.normal, Vector3::Y);
            }
            RaycastHit::NoHit => panic!("expected a hit"),
        }
    }

    #[test]
    fn test_plane_miss() {
        let plane = floor();

        // Parallel
        assert!(!plane.intersect(&Ray::new(Vector3::ZERO, Vector3::X)).is_hit());
        // Facing away
        assert!(!plane.intersect(&Ray::new(Vector3::ZERO, Vector3::Y)).is_hit());
    }

    #[test]
    fn test_degenerate_normal() {
        assert!(matches!(
            Plane::new(Vector3::ZERO, Vector3::ZERO, Material::default()),
            Err(SceneError::DegenerateNormal)
        ));
    }
}
