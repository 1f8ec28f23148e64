//! The surface contract every primitive implements.

use std::fmt;

use prism_math::{Ray, Vector3};

use crate::{Material, RaycastHit};

/// A renderable surface.
///
/// Objects are built once with the scene and only read during rendering, so
/// they must be shareable across render threads. Adding a primitive means
/// adding an implementation of this trait; `Scene` and the renderer only see
/// `dyn SceneObject`.
pub trait SceneObject: fmt::Debug + Send + Sync {
    /// Intersect `ray` with this surface.
    ///
    /// Returns the nearest hit strictly in front of the ray origin.
    fn intersect(&self, ray: &Ray) -> RaycastHit<'_>;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vector3) -> Vector3;

    /// Surface material.
    fn material(&self) -> &Material;

    /// Shortcut for `material().reflectivity`.
    fn reflectivity(&self) -> f64 {
        self.material().reflectivity
    }
}
