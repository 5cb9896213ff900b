/// RGBA8 image payload used as repaint source and mip level data

use crate::error::{Error, Result};

const SOURCE: &str = "texcache::ImageData";

/// Tightly packed RGBA8 image (row-major, 4 bytes per pixel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Bytes per pixel (RGBA8)
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Create an image from raw RGBA8 bytes
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidImage` if a dimension is zero or the byte length
    /// does not match `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            crate::cache_bail!(
                SOURCE,
                Error::InvalidImage,
                "image dimensions must be non-zero, got {}x{}",
                width,
                height
            );
        }

        let expected = Self::byte_len_for(width, height);
        if pixels.len() != expected {
            crate::cache_bail!(
                SOURCE,
                Error::InvalidImage,
                "{}x{} image expects {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            );
        }

        Ok(Self { width, height, pixels })
    }

    /// Wrap bytes whose dimensions were derived from an already valid image
    pub(crate) fn from_derived(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(pixels.len(), Self::byte_len_for(width, height));
        Self { width, height, pixels }
    }

    /// Create an image where every pixel has the same color
    ///
    /// Zero dimensions are raised to 1.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(Self::byte_len_for(width, height))
            .collect();
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read the pixel at (x, y), or None when out of bounds
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let p = &self.pixels[offset..offset + Self::BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }

    fn byte_len_for(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::BYTES_PER_PIXEL
    }
}

#[cfg(test)]
#[path = "image_data_tests.rs"]
mod tests;
