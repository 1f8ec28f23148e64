//! Display-space image buffer.

use std::path::Path;

use crate::{BucketResult, RenderResult};

/// Simple image buffer holding 8-bit display RGB values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = self.index(x, y);
        self.pixels[idx] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let rgb = result.pixels[local_y as usize * bucket.width as usize + local_x as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, rgb);
            }
        }
    }

    /// Convert to an `image` crate buffer (for encoding or display).
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }

    /// Save to disk. The format is chosen from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }
}
