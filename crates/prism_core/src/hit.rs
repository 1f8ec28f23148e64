//! Result of a ray-object intersection query.

use prism_math::Vector3;

use crate::SceneObject;

/// Record of a ray striking an object.
///
/// Borrows the object it struck; it never owns scene state.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// The object that was hit
    pub object: &'a dyn SceneObject,
    /// Distance from the ray origin to the hit point (always > 0)
    pub distance: f64,
    /// World-space hit location
    pub location: Vector3,
    /// Unit surface normal at the hit location
    pub normal: Vector3,
}

/// Outcome of intersecting a ray with an object or a whole scene.
#[derive(Debug, Clone, Copy, Default)]
pub enum RaycastHit<'a> {
    /// The ray escaped. Treated as a hit at infinite distance.
    #[default]
    NoHit,
    Hit(HitRecord<'a>),
}

impl<'a> RaycastHit<'a> {
    /// Distance to the hit, or `f64::INFINITY` when nothing was hit.
    #[inline]
    pub fn distance(&self) -> f64 {
        match self {
            RaycastHit::NoHit => f64::INFINITY,
            RaycastHit::Hit(record) => record.distance,
        }
    }

    /// The struck object, if any.
    pub fn object(&self) -> Option<&'a dyn SceneObject> {
        match self {
            RaycastHit::NoHit => None,
            RaycastHit::Hit(record) => Some(record.object),
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, RaycastHit::Hit(_))
    }

    /// Keep whichever of `self` and `other` is closer. Ties keep `self`.
    pub fn nearest(self, other: RaycastHit<'a>) -> RaycastHit<'a> {
        if other.distance() < self.distance() {
            other
        } else {
            self
        }
    }
}

impl<'a> From<HitRecord<'a>> for RaycastHit<'a> {
    fn from(record: HitRecord<'a>) -> Self {
        RaycastHit::Hit(record)
    }
}
