//! Prism Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer with Phong shading, hard shadows and mirror
//! reflection. Scenes come from `prism_core`; output is an in-memory
//! display-space image.

mod bucket;
mod buffer;
mod camera;
mod error;
mod renderer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use buffer::ImageBuffer;
pub use camera::{Camera, DEFAULT_FOV};
pub use error::{RenderError, RenderResult};
pub use renderer::{tonemap, RenderConfig, Renderer, DEFAULT_BACKGROUND, EPSILON};

/// Re-export the scene model and math types
pub use prism_core::{Material, Plane, PointLight, Scene, SceneObject, Sphere};
pub use prism_math::{ColorRgb, Ray, Vector3};
