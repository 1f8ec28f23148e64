//! Core Whitted ray tracing renderer.
//!
//! Implements recursive ray tracing with:
//! - Phong local illumination (ambient, diffuse, specular)
//! - Hard shadows from point lights
//! - Mirror reflection with a bounded bounce budget
//! - Sigmoidal tone mapping and gamma encoding

use std::time::Instant;

use prism_core::{RaycastHit, Scene, SceneObject};
use prism_math::{ColorRgb, Ray, ReflectExt, Vector3};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, ImageBuffer, RenderError, RenderResult};

/// Bias applied to reflected and shadow ray origins to avoid self-intersection.
pub const EPSILON: f64 = 1e-4;

/// Color returned for rays that escape the scene.
pub const DEFAULT_BACKGROUND: ColorRgb = ColorRgb::splat(0.001);

/// Tone mapping brightness.
const TONEMAP_BRIGHTNESS: f64 = 2.0;
/// Tone mapping contrast.
const TONEMAP_CONTRAST: f64 = 1.3;
const DISPLAY_GAMMA: f64 = 2.2;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of reflection bounces (0 disables reflection)
    pub bounces: u32,
    /// Background color when a ray doesn't hit anything
    pub background: ColorRgb,
    /// Bucket edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            bounces: 2,
            background: DEFAULT_BACKGROUND,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Whitted ray tracer for a fixed image size and bounce budget.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    camera: Camera,
}

impl Renderer {
    /// Create a renderer with default settings apart from size and bounce budget.
    pub fn new(width: u32, height: u32, bounces: u32) -> RenderResult<Self> {
        Self::with_config(RenderConfig {
            width,
            height,
            bounces,
            ..Default::default()
        })
    }

    /// Create a renderer from a full configuration.
    pub fn with_config(config: RenderConfig) -> RenderResult<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        if config.bucket_size == 0 {
            return Err(RenderError::InvalidBucketSize);
        }

        let camera = Camera::new(config.width, config.height);
        Ok(Self { config, camera })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Trace `ray` through `scene` and return its linear color.
    ///
    /// Recursion depth is bounded by `bounces_left`, which decreases by one
    /// per reflection.
    pub fn trace(&self, scene: &Scene, ray: &Ray, bounces_left: u32) -> ColorRgb {
        let hit = match scene.find_closest_intersection(ray) {
            RaycastHit::NoHit => return self.config.background,
            RaycastHit::Hit(hit) => hit,
        };

        let p = hit.location;
        let n = hit.normal;
        let o = ray.origin();

        let direct = self.illuminate(scene, hit.object, p, n, o);
        let reflectivity = hit.object.reflectivity();

        if bounces_left == 0 || reflectivity == 0.0 {
            return direct;
        }

        // Mirror the incoming direction about the normal
        let d = ray.direction();
        let r = if n.length() == 0.0 || d.length() == 0.0 {
            Vector3::ZERO
        } else {
            (-d.normalize()).reflect_in(n.normalize()).normalize_or_zero()
        };

        let reflected_ray = Ray::new(p + r * EPSILON, r);
        let reflected = self.trace(scene, &reflected_ray, bounces_left - 1);

        direct * (1.0 - reflectivity) + reflected * reflectivity
    }

    /// Direct Phong illumination of `object` at point `p` with normal `n`.
    ///
    /// `o` is the origin of the ray that struck the surface and stands in for
    /// the viewer in the specular term, including on reflected rays.
    fn illuminate(
        &self,
        scene: &Scene,
        object: &dyn SceneObject,
        p: Vector3,
        n: Vector3,
        o: Vector3,
    ) -> ColorRgb {
        let material = object.material();
        let n = n.normalize_or_zero();
        let v = (o - p).normalize_or_zero();

        let mut color = material.color * scene.ambient();

        for light in scene.lights() {
            let to_light = light.position - p;
            let distance_to_light = to_light.length();
            let intensity = light.illumination_at(distance_to_light);

            let l = to_light.normalize_or_zero();

            // Hard shadow: anything at or before the light blocks it entirely
            let shadow_ray = Ray::new(p + l * EPSILON, l);
            if scene.find_closest_intersection(&shadow_ray).distance() <= distance_to_light {
                continue;
            }

            let r = l.reflect_in(n);

            let diffuse = material.color * intensity * (material.kd * n.dot(l).max(0.0));
            let specular =
                light.color * intensity * (material.ks * r.dot(v).max(0.0).powf(material.alpha));

            color += diffuse + specular;
        }

        color
    }

    /// Trace the primary ray for pixel (x, y) and return its display color.
    pub fn render_pixel(&self, scene: &Scene, x: u32, y: u32) -> [u8; 3] {
        let ray = self.camera.cast_ray(x, y);
        let linear = self.trace(scene, &ray, self.config.bounces);
        tonemap(linear).to_rgb8()
    }

    /// Render the entire scene, one pixel at a time in row-major order.
    pub fn render(&self, scene: &Scene) -> ImageBuffer {
        let (width, height) = (self.config.width, self.config.height);
        self.log_start(scene);
        let start = Instant::now();

        let mut image = ImageBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                image.set(x, y, self.render_pixel(scene, x, y));
            }

            if y % 10 == 0 {
                log::debug!(
                    "{:.2}% completed",
                    100.0 * y as f64 / height.saturating_sub(1).max(1) as f64
                );
            }
        }

        log::info!("Rendered in {:?}", start.elapsed());
        image
    }

    /// Render the scene in buckets across the rayon thread pool.
    ///
    /// Produces exactly the same image as [`Renderer::render`].
    pub fn render_parallel(&self, scene: &Scene) -> ImageBuffer {
        let (width, height) = (self.config.width, self.config.height);
        self.log_start(scene);
        let start = Instant::now();

        let buckets = generate_buckets(width, height, self.config.bucket_size);
        log::debug!(
            "Rendering {} buckets on {} threads",
            buckets.len(),
            rayon::current_num_threads()
        );

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, self, scene)))
            .collect();

        let mut image = ImageBuffer::new(width, height);
        for result in &results {
            image.write_bucket(result);
        }

        log::info!("Rendered in {:?}", start.elapsed());
        image
    }

    fn log_start(&self, scene: &Scene) {
        log::info!(
            "Rendering {}x{} with {} bounces ({} objects, {} lights)",
            self.config.width,
            self.config.height,
            self.config.bounces,
            scene.object_count(),
            scene.light_count()
        );
    }
}

/// Combined tone mapping and display encoding.
///
/// Sigmoidal compression `x^b / (x^b + (0.5/a)^b)` per channel, then gamma
/// encoding. Maps 0 to 0 and is non-decreasing for non-negative input.
pub fn tonemap(linear: ColorRgb) -> ColorRgb {
    let pow = linear.power(TONEMAP_CONTRAST);
    let midpoint = (0.5 / TONEMAP_BRIGHTNESS).powf(TONEMAP_CONTRAST);
    let display = pow * (pow + midpoint).inv();

    display.power(1.0 / DISPLAY_GAMMA)
}
