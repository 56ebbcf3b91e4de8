//! Observer hooks for simulation progress.
//!
//! Hosts implement [`SimObserver`] to receive ticks, recorded samples, and
//! rendered frames without the facade knowing anything about UI toolkits or
//! storage backends. All methods have empty default bodies, so an
//! implementation only overrides what it cares about:
//!
//! ```
//! use patina_sim::{HistoryPoint, SimObserver};
//!
//! struct SamplePrinter;
//!
//! impl SimObserver for SamplePrinter {
//!     fn on_sample(&mut self, point: &HistoryPoint) {
//!         println!("day {:.1}: {:.3}% degraded", point.time_days, point.degradation_percent);
//!     }
//! }
//! ```

use patina_core::ExposureDuration;
use patina_image::ImageBuffer;

use crate::error::SimError;
use crate::history::HistoryPoint;

/// Receives simulation events as they happen.
///
/// Callbacks run synchronously inside the tick that produced them, in a fixed
/// order per tick: `on_tick`, then `on_sample` and `on_frame` when the tick
/// falls on the record cadence. Implementations should return quickly; a slow
/// observer delays the next tick.
pub trait SimObserver {
    /// A tick completed and the exposure clock advanced.
    fn on_tick(&mut self, _tick: u64, _exposure: &ExposureDuration) {}

    /// A sample was recorded into the history buffer.
    fn on_sample(&mut self, _point: &HistoryPoint) {}

    /// A transformed frame is ready. The borrow is only valid for the call;
    /// copy the pixels out if they are needed later.
    fn on_frame(&mut self, _frame: &ImageBuffer) {}

    /// The history buffer was explicitly cleared.
    fn on_history_cleared(&mut self) {}

    /// A non-fatal error occurred during a tick. The simulation keeps going;
    /// this is the hook for transient notifications.
    fn on_error(&mut self, _error: &SimError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
