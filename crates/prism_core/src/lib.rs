//! Prism Core - scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Surfaces**: the `SceneObject` trait with `Sphere` and `Plane` implementations
//! - **Lighting**: `PointLight` with inverse-square falloff
//! - **Scene**: objects, lights and ambient light with closest-hit queries
//! - **Loading**: JSON scene descriptions
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/three_spheres.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

mod error;
mod hit;
mod light;
pub mod loader;
mod material;
mod object;
mod plane;
pub mod scene;
mod sphere;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use hit::{HitRecord, RaycastHit};
pub use light::PointLight;
pub use loader::{load_scene, load_scene_from_str};
pub use material::Material;
pub use object::SceneObject;
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
