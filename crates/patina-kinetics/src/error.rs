//! Error types for patina-kinetics.

use thiserror::Error;

/// Errors from the kinetics layer.
///
/// `ComputationOverflow` is constructed by callers that want to surface a
/// sanitized sample as a transient notification; the engine itself never
/// fails, it clamps (see [`DegradationEngine::fraction`][crate::DegradationEngine::fraction]).
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("visual amplification {0} must be a finite positive number")]
    InvalidAmplification(f64),

    #[error("non-finite rate constant {rate_constant} at {total_days} exposure days")]
    ComputationOverflow { rate_constant: f64, total_days: f64 },
}

/// Shorthand result type for `patina-kinetics`.
pub type KineticsResult<T> = Result<T, KineticsError>;
