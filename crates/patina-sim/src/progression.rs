//! Wall-clock tick scheduling for exposure progression.
//!
//! [`TimeProgression`] is a poll-driven state machine rather than a thread: the
//! host calls [`Simulation::poll`](crate::Simulation::poll) from whatever loop
//! it already runs (frame callback, event loop turn, test harness) and the
//! progression converts elapsed wall time into a whole number of due ticks.
//! This keeps tick execution strictly sequential and leaves the facade free of
//! threads and channels.
//!
//! # States
//!
//! | State     | Meaning                                            |
//! |-----------|----------------------------------------------------|
//! | `Stopped` | No timing state held. `poll` yields nothing.       |
//! | `Running` | Elapsed wall time accumulates into due ticks.      |
//! | `Paused`  | Timing suspended, exposure retained. Resumable.    |
//!
//! Transitions are start (Stopped to Running), pause/resume (Running to Paused
//! and back), and stop (any state to Stopped, idempotent). Pausing discards
//! any partial tick already accumulated so a resume starts from a clean edge.

use std::fmt;
use std::time::{Duration, Instant};

use log::warn;

use crate::error::{SimError, SimResult};

/// Default wall-clock interval between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Simulated days added per tick at speed multiplier 1.0.
pub const DEFAULT_BASE_DAYS_PER_TICK: f64 = 0.1;

/// A history sample is recorded once every this many ticks.
pub const DEFAULT_RECORD_EVERY_TICKS: u32 = 10;

/// Ceiling on ticks replayed after a stall before the backlog is dropped.
pub const DEFAULT_MAX_CATCHUP_TICKS: u32 = 10;

// ── Configuration ───────────────────────────────────────────────────────────

/// Tunable scheduler parameters.
///
/// The defaults advance 0.1 simulated days per 100 ms tick (roughly one day
/// per real second at speed 1.0) and record one history sample per second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionConfig {
    /// Wall-clock interval between ticks.
    pub tick_period:        Duration,
    /// Simulated days per tick before the speed multiplier is applied.
    pub base_days_per_tick: f64,
    /// Record a history sample every this many ticks.
    pub record_every_ticks: u32,
    /// Maximum ticks replayed in one poll after a stall; the rest are dropped.
    pub max_catchup_ticks:  u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            tick_period:        DEFAULT_TICK_PERIOD,
            base_days_per_tick: DEFAULT_BASE_DAYS_PER_TICK,
            record_every_ticks: DEFAULT_RECORD_EVERY_TICKS,
            max_catchup_ticks:  DEFAULT_MAX_CATCHUP_TICKS,
        }
    }
}

impl ProgressionConfig {
    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.tick_period.is_zero() {
            return Err(SimError::Config("tick period must be non-zero".into()));
        }
        if !self.base_days_per_tick.is_finite() || self.base_days_per_tick <= 0.0 {
            return Err(SimError::Config(format!(
                "base days per tick must be finite and positive, got {}",
                self.base_days_per_tick
            )));
        }
        if self.record_every_ticks == 0 {
            return Err(SimError::Config("record cadence must be at least 1 tick".into()));
        }
        if self.max_catchup_ticks == 0 {
            return Err(SimError::Config("catch-up ceiling must be at least 1 tick".into()));
        }
        Ok(())
    }
}

// ── State machine ───────────────────────────────────────────────────────────

/// Playback state of the exposure scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionState {
    /// Not scheduling. The initial and terminal state.
    Stopped,
    /// Actively converting wall time into ticks.
    Running,
    /// Suspended with exposure retained; resumable.
    Paused,
}

impl fmt::Display for ProgressionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProgressionState::Stopped => "stopped",
            ProgressionState::Running => "running",
            ProgressionState::Paused  => "paused",
        };
        write!(f, "{name}")
    }
}

/// Poll-driven tick scheduler.
///
/// Holds the playback state, the wall-clock accumulator, and the record
/// cadence counter. Degradation math and callbacks live in the facade; this
/// type only decides *how many* ticks are due and *which* of them record.
#[derive(Debug, Clone)]
pub struct TimeProgression {
    config:             ProgressionConfig,
    state:              ProgressionState,
    last_poll:          Option<Instant>,
    carry:              Duration,
    tick_count:         u64,
    ticks_since_record: u32,
}

impl TimeProgression {
    pub fn new(config: ProgressionConfig) -> Self {
        Self {
            config,
            state: ProgressionState::Stopped,
            last_poll: None,
            carry: Duration::ZERO,
            tick_count: 0,
            ticks_since_record: 0,
        }
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    pub fn state(&self) -> ProgressionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ProgressionState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == ProgressionState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ProgressionState::Stopped
    }

    /// Total ticks executed since the last start.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Begin scheduling from `now`. Only valid from `Stopped`; returns whether
    /// the transition happened.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != ProgressionState::Stopped {
            return false;
        }
        self.state = ProgressionState::Running;
        self.last_poll = Some(now);
        self.carry = Duration::ZERO;
        self.tick_count = 0;
        self.ticks_since_record = 0;
        true
    }

    /// Suspend scheduling. Only valid from `Running`; returns whether the
    /// transition happened. Partial tick time already accumulated is dropped.
    pub fn pause(&mut self) -> bool {
        if self.state != ProgressionState::Running {
            return false;
        }
        self.state = ProgressionState::Paused;
        self.last_poll = None;
        self.carry = Duration::ZERO;
        true
    }

    /// Resume scheduling from `now`. Only valid from `Paused`; returns whether
    /// the transition happened.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state != ProgressionState::Paused {
            return false;
        }
        self.state = ProgressionState::Running;
        self.last_poll = Some(now);
        true
    }

    /// Return to `Stopped` from any state. Idempotent.
    pub fn stop(&mut self) {
        self.state = ProgressionState::Stopped;
        self.last_poll = None;
        self.carry = Duration::ZERO;
    }

    /// Convert wall time elapsed up to `now` into a number of due ticks.
    ///
    /// Yields zero unless `Running`. Sub-period remainders carry over to the
    /// next poll so no wall time is lost across frequent polling. After a
    /// stall longer than `max_catchup_ticks` periods the backlog is dropped
    /// rather than replayed, so a suspended host does not fast-forward the
    /// exposure clock on wake.
    pub(crate) fn due_ticks(&mut self, now: Instant) -> u32 {
        if self.state != ProgressionState::Running {
            return 0;
        }
        let Some(last) = self.last_poll else {
            self.last_poll = Some(now);
            return 0;
        };
        let total = self.carry + now.saturating_duration_since(last);
        self.last_poll = Some(now);

        let period = self.config.tick_period;
        let due = (total.as_nanos() / period.as_nanos()) as u64;
        if due == 0 {
            self.carry = total;
            return 0;
        }
        let cap = u64::from(self.config.max_catchup_ticks);
        if due > cap {
            warn!(
                "tick backlog of {due} after a {} ms stall; running {cap} and dropping the rest",
                total.as_millis()
            );
            self.carry = Duration::ZERO;
            return self.config.max_catchup_ticks;
        }
        let due = due as u32;
        self.carry = total - period * due;
        due
    }

    /// Account for one executed tick; returns its index and whether it falls
    /// on the record cadence.
    pub(crate) fn complete_tick(&mut self) -> (u64, bool) {
        self.tick_count += 1;
        self.ticks_since_record += 1;
        let record = self.ticks_since_record >= self.config.record_every_ticks;
        if record {
            self.ticks_since_record = 0;
        }
        (self.tick_count, record)
    }
}

impl Default for TimeProgression {
    fn default() -> Self {
        Self::new(ProgressionConfig::default())
    }
}
