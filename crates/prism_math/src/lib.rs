// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod color;
mod ray;
mod vector;

pub use color::ColorRgb;
pub use ray::Ray;
pub use vector::{ReflectExt, Vector3};
