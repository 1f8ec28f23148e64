//! Errors raised while building or loading a scene.

use thiserror::Error;

/// Errors that can occur while constructing scene objects or loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Plane normal must have non-zero length")]
    DegenerateNormal,

    #[error("Reflectivity must be within [0, 1], got {0}")]
    InvalidReflectivity(f64),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
