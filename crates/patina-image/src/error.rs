//! Error types for patina-image.

use thiserror::Error;

/// Errors from buffer validation and the transform pipeline.
///
/// Both are recoverable: `NotReady` means "nothing to show yet" and the
/// previous output frame stays valid; `DimensionMismatch` rejects malformed
/// host input at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("no source image: buffer is missing or zero-sized")]
    NotReady,

    #[error("pixel data length {got} does not match {width}x{height} RGBA (expected {expected})")]
    DimensionMismatch {
        width:    u32,
        height:   u32,
        expected: usize,
        got:      usize,
    },
}

/// Shorthand result type for `patina-image`.
pub type ImageResult<T> = Result<T, ImageError>;
