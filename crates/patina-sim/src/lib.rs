//! `patina-sim` — simulation facade for the patina framework.
//!
//! Wires the environment controls, exposure clock, kinetics engine, and
//! color transform into one poll-driven simulation with playback control,
//! bounded history, and observer callbacks.
//!
//! # Tick execution
//!
//! ```text
//! host loop:
//!   sim.poll(Instant::now(), &mut observer)
//!     ① Due      — elapsed wall time ÷ tick period, capped after stalls.
//!     ② Advance  — exposure clock += speed × base days per tick.
//!     ③ Notify   — observer.on_tick(index, exposure).
//!     ④ Record   — every Nth tick: sample kinetics, push history point,
//!                  observer.on_sample; render and publish a frame when a
//!                  source image is installed.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Serializable snapshots, history points, and configs.    |
//! | `parallel` | Row-parallel color transform (via `patina-image`).      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::time::Instant;
//!
//! use patina_core::ScenarioPreset;
//! use patina_sim::{NoopObserver, Simulation};
//!
//! let mut sim = Simulation::builder()
//!     .preset(ScenarioPreset::Museum)
//!     .build()?;
//! let mut observer = NoopObserver;
//! sim.set_running(true);
//! sim.start(Instant::now(), &mut observer);
//! loop {
//!     sim.poll(Instant::now(), &mut observer);
//!     // render sim.snapshot(), sleep a frame, ...
//! }
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod progression;
pub mod simulation;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use history::{HistoryBuffer, HistoryPoint, DEFAULT_HISTORY_CAPACITY};
pub use observer::{NoopObserver, SimObserver};
pub use progression::{
    ProgressionConfig, ProgressionState, TimeProgression, DEFAULT_BASE_DAYS_PER_TICK,
    DEFAULT_MAX_CATCHUP_TICKS, DEFAULT_RECORD_EVERY_TICKS, DEFAULT_TICK_PERIOD,
};
pub use simulation::{Simulation, DEFAULT_SPEED, SPEED_MAX, SPEED_MIN};
pub use snapshot::SimulationSnapshot;
