//! `patina-kinetics` — dose-response kinetics for the patina framework.
//!
//! Computes how far an artifact has chemically degraded after a given
//! exposure to temperature, humidity, and light.  Two layers:
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`model`]  | Pure functions: moisture content, rate constant          |
//! | [`engine`] | `DegradationEngine`, `DegradationSample`                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use patina_core::{EnvironmentState, ExposureClock, ExposureDuration};
//! use patina_kinetics::DegradationEngine;
//!
//! let env = EnvironmentState::new(20.0, 50.0, 0.15);
//! let clock = ExposureClock::with_duration(ExposureDuration::from_years(100.0));
//! let sample = DegradationEngine::new().sample(&env, &clock);
//! println!("{:.4}% degraded", sample.degradation_percent());
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `DegradationSample`.     |

pub mod engine;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{DegradationEngine, DegradationSample, DEFAULT_VISUAL_AMPLIFICATION};
pub use error::{KineticsError, KineticsResult};
pub use model::{moisture_content, rate_constant, rate_constant_for};
