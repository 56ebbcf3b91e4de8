//! Strlič dose-response kinetics.
//!
//! # Model
//!
//! Pure functions, no state.  Degradation is first-order in time with a rate
//! constant combining two pathways:
//!
//!   k = k0_dark  · H2O^q · exp(−Ea_dark  / (R·T))          (thermal/hydrolytic)
//!     + k0_light · I^p  · H2O^q · exp(−Ea_light / (R·T))   (photochemical, I > 0)
//!
//! where `H2O` is the equilibrium moisture content of the material:
//!
//!   H2O = |ln(1 − RH) / (1.67·T − 285.655)| ^ (1 / (2.491 − 0.012·T))
//!
//! with RH as a fraction and T in Kelvin.  Two numeric guards are part of the
//! model, not incidental:
//!
//! - RH is clamped to [0.01, 0.999] before the logarithm, so `ln(0)` and
//!   `ln(negative)` cannot occur.
//! - The base is taken as an absolute value before exponentiation, because
//!   the exponent is fractional and a fractional power of a negative number
//!   is undefined.
//!
//! Within the physical temperature range the inner exponent
//! `1/(2.491 − 0.012·T)` is negative, so moisture content *falls* as RH
//! rises.  Counter-intuitive but intentional; the constants are the
//! published model.  Both denominators only vanish far below −100 °C,
//! outside anything [`EnvironmentState`] admits.

use patina_core::{EnvironmentState, KELVIN_OFFSET};

// ── Model constants ───────────────────────────────────────────────────────────

/// Universal gas constant R, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;
/// Activation energy of the dark (thermal/hydrolytic) pathway, J/mol.
pub const EA_DARK: f64 = 70_000.0;
/// Activation energy of the photochemical pathway, J/mol.
pub const EA_LIGHT: f64 = 25_000.0;
/// Pre-exponential factor of the dark pathway, per day.
pub const K0_DARK: f64 = 1e-4;
/// Pre-exponential factor of the photochemical pathway, per day.
pub const K0_LIGHT: f64 = 1e-3;
/// Moisture-content exponent q (shared by both pathways).
pub const MOISTURE_EXPONENT: f64 = 0.8;
/// Light-intensity exponent p.
pub const LIGHT_EXPONENT: f64 = 0.9;

/// RH-fraction clamp applied before the logarithm.
const RH_FRACTION_MIN: f64 = 0.01;
const RH_FRACTION_MAX: f64 = 0.999;

// ── Functions ─────────────────────────────────────────────────────────────────

/// Equilibrium moisture content at `rh_fraction` (0–1) and `t_kelvin`.
///
/// Finite and non-negative for any finite inputs in the physical range.
pub fn moisture_content(rh_fraction: f64, t_kelvin: f64) -> f64 {
    let rh = rh_fraction.clamp(RH_FRACTION_MIN, RH_FRACTION_MAX);
    let numerator = (1.0 - rh).ln();
    let denominator = 1.67 * t_kelvin - 285.655;
    let base = (numerator / denominator).abs();
    let exponent = 1.0 / (2.491 - 0.012 * t_kelvin);
    base.powf(exponent)
}

/// Degradation rate constant in per-day units.
///
/// The photochemical term contributes exactly 0 when `light_klux == 0`;
/// it is gated, not merely small.
pub fn rate_constant(t_celsius: f64, rh_percent: f64, light_klux: f64) -> f64 {
    let t_kelvin = t_celsius + KELVIN_OFFSET;
    let h2o = moisture_content(rh_percent / 100.0, t_kelvin);
    let h2o_term = h2o.abs().powf(MOISTURE_EXPONENT);

    let k_dark = K0_DARK * h2o_term * (-EA_DARK / (GAS_CONSTANT * t_kelvin)).exp();
    let k_light = if light_klux > 0.0 {
        K0_LIGHT
            * light_klux.powf(LIGHT_EXPONENT)
            * h2o_term
            * (-EA_LIGHT / (GAS_CONSTANT * t_kelvin)).exp()
    } else {
        0.0
    };

    k_dark + k_light
}

/// [`rate_constant`] reading its inputs from an [`EnvironmentState`].
#[inline]
pub fn rate_constant_for(env: &EnvironmentState) -> f64 {
    rate_constant(env.temperature_c(), env.humidity_pct(), env.light_klux())
}
