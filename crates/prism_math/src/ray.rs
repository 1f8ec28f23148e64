use crate::Vector3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length. Callers that need
/// distances or reflection math normalize it themselves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
