//! Error type for simulation construction and driving.

use thiserror::Error;

/// Convenience alias for simulation results.
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by the simulation facade.
///
/// Construction errors come back from
/// [`SimulationBuilder::build`](crate::SimulationBuilder::build). Errors
/// inside a tick are never fatal; they reach the host through
/// [`SimObserver::on_error`](crate::SimObserver::on_error) instead.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid builder or scheduler configuration.
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// Degradation kinetics failed.
    #[error("kinetics error: {0}")]
    Kinetics(#[from] patina_kinetics::KineticsError),

    /// Texture transform failed.
    #[error("image error: {0}")]
    Image(#[from] patina_image::ImageError),

    /// Scenario preset lookup failed.
    #[error("preset error: {0}")]
    Preset(#[from] patina_core::CoreError),
}
