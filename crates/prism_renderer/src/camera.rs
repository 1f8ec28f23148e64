//! Camera for primary ray generation.

use prism_math::{Ray, Vector3};

/// Default horizontal field of view in degrees.
pub const DEFAULT_FOV: f64 = 45.0;

/// Pinhole camera fixed at the world origin, looking down +Z with +Y up.
///
/// The image plane sits at z = 1. All per-pixel quantities are computed once
/// here so `cast_ray` is a couple of multiply-adds.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    fov: f64, // Horizontal field of view in degrees

    // Image plane extents and per-pixel steps, in world units
    plane_width: f64,
    plane_height: f64,
    step_x: f64,
    step_y: f64,
}

impl Camera {
    /// Create a camera for an image of the given size with the default field of view.
    ///
    /// Width and height must be positive.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self::with_fov(image_width, image_height, DEFAULT_FOV)
    }

    /// Create a camera with an explicit horizontal field of view in degrees.
    pub fn with_fov(image_width: u32, image_height: u32, fov: f64) -> Self {
        let aspect = image_width as f64 / image_height as f64;
        let plane_width = 2.0 * (fov.to_radians() / 2.0).tan();
        let plane_height = plane_width / aspect;

        Self {
            image_width,
            image_height,
            fov,
            plane_width,
            plane_height,
            step_x: plane_width / image_width as f64,
            step_y: plane_height / image_height as f64,
        }
    }

    /// Horizontal field of view in degrees.
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image. The returned
    /// direction is unit length.
    pub fn cast_ray(&self, x: u32, y: u32) -> Ray {
        let x_pos = (self.step_x - self.plane_width) / 2.0 + x as f64 * self.step_x;
        let y_pos = (self.plane_height - self.step_y) / 2.0 - y as f64 * self.step_y;

        Ray::new(Vector3::ZERO, Vector3::new(x_pos, y_pos, 1.0).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rays_start_at_origin() {
        let camera = Camera::new(64, 48);
        for (x, y) in [(0, 0), (63, 47), (10, 20)] {
            let ray = camera.cast_ray(x, y);
            assert_eq!(ray.origin(), Vector3::ZERO);
            assert!((ray.direction().length() - 1.0).abs() < 1e-12);
            assert!(ray.direction().z > 0.0);
        }
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        // Odd dimensions put a pixel center exactly on the optical axis
        let camera = Camera::new(101, 51);
        let ray = camera.cast_ray(50, 25);
        assert!((ray.direction() - Vector3::Z).length() < 1e-12);
    }

    #[test]
    fn test_top_left_convention() {
        let camera = Camera::new(100, 50);
        let top_left = camera.cast_ray(0, 0).direction();
        let bottom_right = camera.cast_ray(99, 49).direction();

        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_field_of_view() {
        let camera = Camera::new(100, 100);
        assert_eq!(camera.fov(), DEFAULT_FOV);

        // The outermost pixel centers sit half a pixel inside the frustum edge
        let left = camera.cast_ray(0, 50).direction();
        let half_angle = (-left.x / left.z).atan().to_degrees();
        assert!(half_angle < DEFAULT_FOV / 2.0);
        assert!(half_angle > DEFAULT_FOV / 2.0 - 0.5);
    }

    #[test]
    fn test_deterministic() {
        let camera = Camera::new(32, 32);
        assert_eq!(camera.cast_ray(7, 9), camera.cast_ray(7, 9));
    }
}
