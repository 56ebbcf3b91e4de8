//! The visual-aging color transform.
//!
//! # Per-pixel formula
//!
//! For a visual degradation fraction `v ∈ [0, 1]` each pixel is reworked in
//! f32, rounding back to bytes only at the very end:
//!
//! ```text
//! gray   = (r + g + b) / 3
//! fade   = 1 − v
//! c'     = c·fade + gray·(1 − fade)          desaturate toward gray
//! yellow = v · yellow_shift_max              then shift toward yellow:
//! r''    = clamp(r' + 0.8·yellow, 0, 255)
//! g''    = clamp(g' + 0.4·yellow, 0, 255)
//! b''    = clamp(b' − 0.6·yellow, 0, 255)
//! c'''   = c'' · (1 − darken_max·v)          then darken
//! ```
//!
//! Alpha passes through untouched.  At `v = 0` every step is an exact
//! identity in f32, so the output is byte-for-byte the original; at `v = 1`
//! all three channels collapse to `gray` before the yellow/darken terms.
//!
//! # Pristine source rule
//!
//! [`AgingPipeline`] keeps the pristine source and always transforms from
//! it, never from a previous output, so calls at different fractions do not
//! accumulate drift.  A failed call leaves the previous output frame in
//! place.
//!
//! The coefficients are presentation constants, not calibrated physics;
//! they are configurable with the documented defaults.

use log::debug;

use crate::buffer::ImageBuffer;
use crate::{ImageError, ImageResult};

// ── AgingCoefficients ─────────────────────────────────────────────────────────

/// Tunable constants of the aging look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgingCoefficients {
    /// Yellow shift at full degradation, in channel units.  Default 60.
    pub yellow_shift_max: f32,
    /// Fraction of the yellow shift added to red.  Default 0.8.
    pub yellow_red_gain: f32,
    /// Fraction of the yellow shift added to green.  Default 0.4.
    pub yellow_green_gain: f32,
    /// Fraction of the yellow shift subtracted from blue.  Default 0.6.
    pub yellow_blue_loss: f32,
    /// Brightness lost at full degradation.  Default 0.25.
    pub darken_max: f32,
}

impl Default for AgingCoefficients {
    fn default() -> Self {
        Self {
            yellow_shift_max:  60.0,
            yellow_red_gain:   0.8,
            yellow_green_gain: 0.4,
            yellow_blue_loss:  0.6,
            darken_max:        0.25,
        }
    }
}

// ── Scalar kernel ─────────────────────────────────────────────────────────────

/// Age one RGBA pixel.  Shared by the serial and parallel paths.
#[inline]
fn age_pixel(px: [u8; 4], v: f32, co: &AgingCoefficients) -> [u8; 4] {
    let r = px[0] as f32;
    let g = px[1] as f32;
    let b = px[2] as f32;

    let gray = (r + g + b) / 3.0;
    let fade = 1.0 - v;
    let blend = |c: f32| c * fade + gray * (1.0 - fade);

    let yellow = v * co.yellow_shift_max;
    let r2 = (blend(r) + co.yellow_red_gain * yellow).clamp(0.0, 255.0);
    let g2 = (blend(g) + co.yellow_green_gain * yellow).clamp(0.0, 255.0);
    let b2 = (blend(b) - co.yellow_blue_loss * yellow).clamp(0.0, 255.0);

    let darken = 1.0 - co.darken_max * v;
    [
        (r2 * darken).round() as u8,
        (g2 * darken).round() as u8,
        (b2 * darken).round() as u8,
        px[3],
    ]
}

/// Age one row (or any whole-pixel slice) of RGBA bytes.
fn age_row(src: &[u8], dst: &mut [u8], v: f32, co: &AgingCoefficients) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d.copy_from_slice(&age_pixel([s[0], s[1], s[2], s[3]], v, co));
    }
}

#[cfg(not(feature = "parallel"))]
fn age_into(src: &ImageBuffer, dst: &mut [u8], v: f32, co: &AgingCoefficients) {
    age_row(src.as_bytes(), dst, v, co);
}

/// Row-parallel variant.  Rows are independent, so the split is free of
/// coordination beyond Rayon's join overhead.
#[cfg(feature = "parallel")]
fn age_into(src: &ImageBuffer, dst: &mut [u8], v: f32, co: &AgingCoefficients) {
    use rayon::prelude::*;

    let row_bytes = src.width() as usize * 4;
    src.as_bytes()
        .par_chunks(row_bytes)
        .zip(dst.par_chunks_mut(row_bytes))
        .for_each(|(s, d)| age_row(s, d, v, co));
}

// ── AgingPipeline ─────────────────────────────────────────────────────────────

/// Owns the pristine source image and the working output frame.
///
/// The output frame's allocation is reused across calls; a transform pass
/// allocates nothing once the first frame exists.
#[derive(Debug, Default)]
pub struct AgingPipeline {
    coefficients: AgingCoefficients,
    source:       Option<ImageBuffer>,
    frame:        Option<ImageBuffer>,
}

impl AgingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coefficients(coefficients: AgingCoefficients) -> Self {
        Self {
            coefficients,
            ..Self::default()
        }
    }

    #[inline]
    pub fn coefficients(&self) -> &AgingCoefficients {
        &self.coefficients
    }

    // ── Source management ─────────────────────────────────────────────────

    /// Install the pristine aging source.
    ///
    /// Zero-sized buffers are rejected with [`ImageError::NotReady`] and
    /// leave any previous source (and output frame) untouched.  A new
    /// source invalidates the old output frame.
    pub fn set_source(&mut self, image: ImageBuffer) -> ImageResult<()> {
        if image.is_empty() {
            return Err(ImageError::NotReady);
        }
        self.source = Some(image);
        self.frame = None;
        Ok(())
    }

    /// Drop the source and output frame, e.g. when the host unloads its model.
    pub fn clear_source(&mut self) {
        self.source = None;
        self.frame = None;
    }

    #[inline]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    #[inline]
    pub fn source(&self) -> Option<&ImageBuffer> {
        self.source.as_ref()
    }

    /// The most recent transformed frame, if any call succeeded yet.
    #[inline]
    pub fn frame(&self) -> Option<&ImageBuffer> {
        self.frame.as_ref()
    }

    // ── Transform ─────────────────────────────────────────────────────────

    /// Transform the pristine source at visual degradation `fraction`.
    ///
    /// The fraction is clamped into [0, 1]; non-finite values are treated
    /// as 0.  Returns the freshly written output frame.
    pub fn apply(&mut self, fraction: f64) -> ImageResult<&ImageBuffer> {
        let source = self.source.as_ref().ok_or(ImageError::NotReady)?;

        let v = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0) as f32
        } else {
            debug!("non-finite visual fraction {fraction}; rendering pristine");
            0.0
        };

        // Reuse the previous frame's allocation when the shape matches.
        let mut pixels = match self.frame.take() {
            Some(f) if f.width() == source.width() && f.height() == source.height() => {
                f.into_pixels()
            }
            _ => vec![0; source.as_bytes().len()],
        };

        age_into(source, &mut pixels, v, &self.coefficients);

        let frame = ImageBuffer::from_raw(source.width(), source.height(), pixels);
        Ok(self.frame.insert(frame))
    }

    /// Hand back the pristine source, discarding the output frame.
    ///
    /// Used to fully undo simulated aging without re-running the transform.
    pub fn reset(&mut self) -> ImageResult<&ImageBuffer> {
        if self.source.is_none() {
            return Err(ImageError::NotReady);
        }
        self.frame = None;
        self.source.as_ref().ok_or(ImageError::NotReady)
    }
}
