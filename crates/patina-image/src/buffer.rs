//! RGBA8 pixel buffer.
//!
//! A plain `width × height × 4` byte array, row-major, channel order RGBA.
//! The engine exchanges these with rendering hosts and never holds any
//! rendering-library object; a host uploads `as_bytes()` to whatever
//! texture abstraction it uses.

use crate::{ImageError, ImageResult};

/// An owned RGBA8 image.
///
/// The length invariant (`pixels.len() == width · height · 4`) is checked at
/// construction and maintained by every operation in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    width:  u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap raw RGBA bytes, validating the length against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> ImageResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Buffer of the given size with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self { width, height, pixels }
    }

    /// Internal constructor for buffers whose length is known to match.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self { width, height, pixels }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when there is nothing to transform.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    // ── Pixel access ──────────────────────────────────────────────────────

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and hand back its pixel storage.
    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}
