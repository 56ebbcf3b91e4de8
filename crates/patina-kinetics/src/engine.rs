//! The degradation engine: dose-response integration over exposure time.
//!
//! # Design
//!
//! [`DegradationEngine`] is the one place `1 − exp(−k·t)` is computed, so
//! every consumer (chart sampling, color transform, snapshot export) sees
//! the same number for the same inputs.  Sampling is a handful of float
//! ops; callers recompute on every tick instead of caching.
//!
//! The *visual* fraction is the scientific fraction times a configurable
//! amplification (default 10), capped at 1.  It exists purely so that
//! realistic decades-scale degradation is perceptible on screen, and it
//! must never be reported as the scientific number.

use log::warn;

use patina_core::{EnvironmentState, ExposureClock};

use crate::model;
use crate::{KineticsError, KineticsResult};

/// Amplification applied to the visual fraction when none is configured.
pub const DEFAULT_VISUAL_AMPLIFICATION: f64 = 10.0;

// ── DegradationSample ─────────────────────────────────────────────────────────

/// One evaluation of the kinetics at a fixed environment and exposure.
///
/// `rate_constant` is the raw model output.  The two fractions are always
/// finite and in [0, 1], even when the model produces a non-finite rate
/// (see [`DegradationEngine::fraction`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegradationSample {
    /// Exposure the sample was taken at, in days.
    pub total_days: f64,
    /// Per-day rate constant from [`model::rate_constant`].
    pub rate_constant: f64,
    /// Scientific degradation fraction, `1 − exp(−k·t)`.
    pub degradation_fraction: f64,
    /// Amplified, presentation-only fraction driving the color transform.
    pub visual_degradation_fraction: f64,
}

impl DegradationSample {
    /// Scientific degradation as a percentage, for charts and reports.
    #[inline]
    pub fn degradation_percent(&self) -> f64 {
        self.degradation_fraction * 100.0
    }

    /// Percentage of original color retained, `100 · exp(−k·t)`.
    #[inline]
    pub fn color_remaining_percent(&self) -> f64 {
        (1.0 - self.degradation_fraction) * 100.0
    }
}

// ── DegradationEngine ─────────────────────────────────────────────────────────

/// Combines the kinetics model with an exposure reading.
#[derive(Clone, Debug)]
pub struct DegradationEngine {
    visual_amplification: f64,
}

impl Default for DegradationEngine {
    fn default() -> Self {
        Self {
            visual_amplification: DEFAULT_VISUAL_AMPLIFICATION,
        }
    }
}

impl DegradationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom visual amplification.
    ///
    /// `factor` must be a finite positive number; 1.0 disables amplification.
    pub fn with_amplification(factor: f64) -> KineticsResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(KineticsError::InvalidAmplification(factor));
        }
        Ok(Self {
            visual_amplification: factor,
        })
    }

    #[inline]
    pub fn visual_amplification(&self) -> f64 {
        self.visual_amplification
    }

    /// Sample the kinetics at the clock's current exposure.
    pub fn sample(&self, env: &EnvironmentState, clock: &ExposureClock) -> DegradationSample {
        self.sample_at(env, clock.total_days())
    }

    /// Sample the kinetics at an explicit exposure in days.
    pub fn sample_at(&self, env: &EnvironmentState, total_days: f64) -> DegradationSample {
        let rate_constant = model::rate_constant_for(env);
        let degradation_fraction = Self::fraction(rate_constant, total_days);
        let visual_degradation_fraction =
            (degradation_fraction * self.visual_amplification).min(1.0);

        DegradationSample {
            total_days,
            rate_constant,
            degradation_fraction,
            visual_degradation_fraction,
        }
    }

    /// Dose-response fraction `1 − exp(−k·t)`, sanitized into [0, 1].
    ///
    /// Zero exposure is zero degradation no matter what `k` is.  A
    /// non-finite result (pathological `k`) saturates to 1 rather than
    /// letting NaN/∞ reach the color transform.
    pub fn fraction(rate_constant: f64, total_days: f64) -> f64 {
        if total_days == 0.0 {
            return 0.0;
        }
        let fraction = 1.0 - (-rate_constant * total_days).exp();
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            warn!("non-finite degradation (k = {rate_constant}, t = {total_days} days); saturating");
            1.0
        }
    }
}
