//! `patina-image` — pixel buffers and the visual-aging transform.
//!
//! Turns a pristine RGBA texture plus a visual degradation fraction into an
//! aged texture: desaturation toward gray, a yellow shift, and darkening.
//! Deterministic, allocation-free after the first frame, and always derived
//! from the pristine source so repeated calls never accumulate.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`buffer`]    | `ImageBuffer` — validated RGBA8 storage            |
//! | [`transform`] | `AgingPipeline`, `AgingCoefficients`               |
//! | [`error`]     | `ImageError`, `ImageResult`                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs the transform row-parallel on Rayon's pool.      |

pub mod buffer;
pub mod error;
pub mod transform;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use buffer::ImageBuffer;
pub use error::{ImageError, ImageResult};
pub use transform::{AgingCoefficients, AgingPipeline};
