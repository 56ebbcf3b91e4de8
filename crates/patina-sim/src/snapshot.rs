//! Point-in-time view of the whole simulation.

use patina_core::{EnvironmentState, ExposureDuration};
use patina_kinetics::DegradationSample;

use crate::progression::ProgressionState;

/// Everything a host needs to render one frame of UI: controls, playback
/// flags, and the degradation sample for the current instant.
///
/// With the `serde` feature this serializes directly, so a host can persist
/// or ship the state without poking at individual accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSnapshot {
    pub environment:      EnvironmentState,
    pub exposure:         ExposureDuration,
    pub speed_multiplier: f64,
    /// Master enable: progression can only run while this is set.
    pub running:          bool,
    /// Playback state of the exposure scheduler.
    pub progression:      ProgressionState,
    /// Degradation evaluated for the environment and exposure above.
    pub sample:           DegradationSample,
    /// Recorded points currently held in the history buffer.
    pub history_len:      usize,
}
