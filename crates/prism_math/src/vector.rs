use glam::DVec3;

/// Double precision 3-vector used for all scene geometry.
///
/// This is glam's `DVec3`; add, subtract, scale, dot, cross and length come
/// from glam. Zero-length vectors must go through `normalize_or_zero`, which
/// yields the zero vector instead of NaN.
pub type Vector3 = DVec3;

/// Mirror reflection about a normal.
pub trait ReflectExt {
    /// Reflect `self` about `normal`: `2 * (self . n) * n - self`.
    ///
    /// The result points away from the surface on the mirrored side when
    /// `self` points away from it too. `normal` should be unit length.
    fn reflect_in(self, normal: Self) -> Self;
}

impl ReflectExt for DVec3 {
    #[inline]
    fn reflect_in(self, normal: DVec3) -> DVec3 {
        2.0 * self.dot(normal) * normal - self
    }
}
