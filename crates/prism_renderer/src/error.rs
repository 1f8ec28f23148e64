//! Renderer errors.

use thiserror::Error;

/// Errors that can occur while configuring a render or saving its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Bucket size must be positive")]
    InvalidBucketSize,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
