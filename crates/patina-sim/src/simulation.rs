//! The simulation facade.
//!
//! # Design
//!
//! [`Simulation`] owns one of each collaborator and wires them together; no
//! collaborator knows about any other:
//!
//! | Collaborator        | Crate             | Role                               |
//! |---------------------|-------------------|------------------------------------|
//! | `EnvironmentState`  | `patina-core`     | Clamped control values             |
//! | `ExposureClock`     | `patina-core`     | Normalized exposure duration       |
//! | `DegradationEngine` | `patina-kinetics` | Dose-response evaluation           |
//! | `AgingPipeline`     | `patina-image`    | Pristine-source color transform    |
//! | `TimeProgression`   | this crate        | Wall-clock tick scheduling         |
//! | `HistoryBuffer`     | this crate        | Bounded sample retention           |
//!
//! Two flags gate progression. `running` is the master enable, flipped by
//! [`Simulation::set_running`]; nothing advances while it is off. Playback
//! on top of that is the [`ProgressionState`] machine: started, paused,
//! resumed, and stopped explicitly. Playing implies running, never the
//! reverse.
//!
//! The facade is single-threaded and poll-driven. The host calls
//! [`Simulation::poll`] from its own loop; due ticks execute synchronously,
//! invoking the observer in a fixed order per tick. Errors inside a tick are
//! reported through [`SimObserver::on_error`] and never abort progression.

use std::time::Instant;

use log::{debug, warn};

use patina_core::{EnvironmentState, ExposureClock, ExposureDuration, ScenarioPreset};
use patina_image::{AgingPipeline, ImageBuffer};
use patina_kinetics::{DegradationEngine, DegradationSample, KineticsError};

use crate::builder::SimulationBuilder;
use crate::error::{SimError, SimResult};
use crate::history::{HistoryBuffer, HistoryPoint};
use crate::observer::SimObserver;
use crate::progression::{ProgressionState, TimeProgression};
use crate::snapshot::SimulationSnapshot;

/// Slowest allowed playback speed.
pub const SPEED_MIN: f64 = 0.1;
/// Fastest allowed playback speed.
pub const SPEED_MAX: f64 = 20.0;
/// Speed applied on construction and reset.
pub const DEFAULT_SPEED: f64 = 1.0;

// ── Simulation ──────────────────────────────────────────────────────────────

/// Deterioration simulation for one artifact.
///
/// Created with defaults via [`Simulation::new`] or configured through
/// [`Simulation::builder`]. Drive it by mutating controls, then either
/// polling wall time ([`poll`][Self::poll]) or stepping manually
/// ([`step`][Self::step]).
#[derive(Debug)]
pub struct Simulation {
    env:              EnvironmentState,
    clock:            ExposureClock,
    engine:           DegradationEngine,
    pipeline:         AgingPipeline,
    progression:      TimeProgression,
    history:          HistoryBuffer,
    speed_multiplier: f64,
    running:          bool,
    in_tick:          bool,
}

impl Simulation {
    /// A simulation with default environment, zero exposure, and no source
    /// image.
    pub fn new() -> Self {
        Self::from_parts(
            EnvironmentState::default(),
            ExposureClock::new(),
            DegradationEngine::new(),
            AgingPipeline::new(),
            TimeProgression::default(),
            HistoryBuffer::new(),
            DEFAULT_SPEED,
        )
    }

    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub(crate) fn from_parts(
        env: EnvironmentState,
        clock: ExposureClock,
        engine: DegradationEngine,
        pipeline: AgingPipeline,
        progression: TimeProgression,
        history: HistoryBuffer,
        speed_multiplier: f64,
    ) -> Self {
        Self {
            env,
            clock,
            engine,
            pipeline,
            progression,
            history,
            speed_multiplier,
            running: false,
            in_tick: false,
        }
    }

    // ── Environment controls ──────────────────────────────────────────────

    pub fn environment(&self) -> &EnvironmentState {
        &self.env
    }

    /// Replace all three controls at once. The incoming state was clamped at
    /// construction, so no re-validation is needed.
    pub fn set_environment(&mut self, env: EnvironmentState) {
        self.env = env;
    }

    pub fn set_temperature_c(&mut self, value: f64) {
        self.env.set_temperature_c(value);
    }

    pub fn set_temperature_f(&mut self, value: f64) {
        self.env.set_temperature_f(value);
    }

    pub fn set_humidity_pct(&mut self, value: f64) {
        self.env.set_humidity_pct(value);
    }

    pub fn set_light_klux(&mut self, value: f64) {
        self.env.set_light_klux(value);
    }

    // ── Exposure controls ─────────────────────────────────────────────────

    pub fn exposure(&self) -> ExposureDuration {
        self.clock.duration()
    }

    /// Normalized exposure in days, the scalar the kinetics run on.
    pub fn total_days(&self) -> f64 {
        self.clock.total_days()
    }

    pub fn set_exposure_days(&mut self, days: f64) {
        self.clock.set_days(days);
    }

    pub fn set_exposure_months(&mut self, months: f64) {
        self.clock.set_months(months);
    }

    pub fn set_exposure_years(&mut self, years: f64) {
        self.clock.set_years(years);
    }

    pub fn set_exposure(&mut self, duration: ExposureDuration) {
        self.clock.set_duration(duration);
    }

    /// Apply a scenario preset: environment and exposure change together,
    /// speed and playback state do not.
    pub fn apply_preset(&mut self, preset: ScenarioPreset) {
        self.env = preset.environment();
        self.clock.set_duration(preset.exposure());
    }

    /// Apply a preset by its camelCase key, e.g. `"poorStorage"`.
    pub fn apply_preset_by_name(&mut self, name: &str) -> SimResult<ScenarioPreset> {
        let preset: ScenarioPreset = name.parse()?;
        self.apply_preset(preset);
        Ok(preset)
    }

    // ── Speed ─────────────────────────────────────────────────────────────

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Set the playback speed, clamped to [[`SPEED_MIN`], [`SPEED_MAX`]].
    /// Non-finite input maps to the minimum.
    pub fn set_speed_multiplier(&mut self, value: f64) {
        let clamped = if value.is_finite() {
            value.clamp(SPEED_MIN, SPEED_MAX)
        } else {
            SPEED_MIN
        };
        if clamped != value {
            debug!("speed multiplier {value} clamped to {clamped}");
        }
        self.speed_multiplier = clamped;
    }

    /// Simulated days one tick currently advances.
    pub fn days_per_tick(&self) -> f64 {
        self.speed_multiplier * self.progression.config().base_days_per_tick
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Master enable. Disabling while playing also stops playback.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
        if !running {
            self.progression.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the scheduler is actively converting wall time into ticks.
    pub fn is_playing(&self) -> bool {
        self.progression.is_running()
    }

    pub fn progression_state(&self) -> ProgressionState {
        self.progression.state()
    }

    /// Ticks executed since playback last started.
    pub fn tick_count(&self) -> u64 {
        self.progression.tick_count()
    }

    /// Begin playback from `now` and record an initial history point, so the
    /// chart starts at the current state rather than after the first cadence.
    ///
    /// Ignored (returning `false`) unless the simulation is enabled and
    /// playback is stopped; a paused simulation resumes with
    /// [`resume`][Self::resume] instead.
    pub fn start<O: SimObserver>(&mut self, now: Instant, observer: &mut O) -> bool {
        if !self.running {
            debug!("start ignored while the simulation is disabled");
            return false;
        }
        if !self.progression.start(now) {
            return false;
        }
        self.record_sample(observer);
        true
    }

    /// Suspend playback, keeping accumulated exposure. Returns whether the
    /// transition happened.
    pub fn pause(&mut self) -> bool {
        self.progression.pause()
    }

    /// Resume paused playback from `now`. Returns whether the transition
    /// happened.
    pub fn resume(&mut self, now: Instant) -> bool {
        if !self.running {
            debug!("resume ignored while the simulation is disabled");
            return false;
        }
        self.progression.resume(now)
    }

    /// Stop playback. Idempotent; exposure and history are retained. Call
    /// this before dropping the simulation on host teardown.
    pub fn stop(&mut self) {
        self.progression.stop();
    }

    /// Restore construction defaults: environment, exposure, and speed reset,
    /// playback stops, and the master enable turns off. History is kept; use
    /// [`clear_history`][Self::clear_history] to discard it.
    pub fn reset(&mut self) {
        self.progression.stop();
        self.env = EnvironmentState::default();
        self.clock.reset();
        self.speed_multiplier = DEFAULT_SPEED;
        self.running = false;
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Execute every tick that has come due by `now`; returns how many ran.
    ///
    /// Yields zero when not playing. Catch-up after a stall is capped by the
    /// progression config; the dropped backlog is logged, not replayed.
    pub fn poll<O: SimObserver>(&mut self, now: Instant, observer: &mut O) -> u32 {
        if self.in_tick {
            return 0;
        }
        let due = self.progression.due_ticks(now);
        for _ in 0..due {
            self.run_tick(observer);
        }
        due
    }

    /// Advance `ticks` ticks immediately, ignoring wall time.
    ///
    /// Works in any playback state while the simulation is enabled; the
    /// record cadence applies exactly as under [`poll`][Self::poll]. Returns
    /// how many ticks ran.
    pub fn step<O: SimObserver>(&mut self, ticks: u32, observer: &mut O) -> u32 {
        if !self.running || self.in_tick {
            return 0;
        }
        for _ in 0..ticks {
            self.run_tick(observer);
        }
        ticks
    }

    /// One tick: advance the clock, notify, and record on cadence. The busy
    /// flag drops any re-entrant drive attempt made from observer callbacks.
    fn run_tick<O: SimObserver>(&mut self, observer: &mut O) {
        self.in_tick = true;
        self.clock.advance(self.days_per_tick());
        let (tick, record) = self.progression.complete_tick();
        let exposure = self.clock.duration();
        observer.on_tick(tick, &exposure);
        if record {
            self.record_sample(observer);
        }
        self.in_tick = false;
    }

    fn record_sample<O: SimObserver>(&mut self, observer: &mut O) {
        let sample = self.engine.sample(&self.env, &self.clock);
        if !sample.rate_constant.is_finite() {
            let err = SimError::Kinetics(KineticsError::ComputationOverflow {
                rate_constant: sample.rate_constant,
                total_days:    sample.total_days,
            });
            warn!("{err}");
            observer.on_error(&err);
        }

        let point = HistoryPoint::capture(&self.env, &sample);
        self.history.push(point);
        observer.on_sample(&point);

        if self.pipeline.has_source() {
            match self.pipeline.apply(sample.visual_degradation_fraction) {
                Ok(frame) => observer.on_frame(frame),
                Err(err) => {
                    let err = SimError::Image(err);
                    warn!("{err}");
                    observer.on_error(&err);
                }
            }
        }
    }

    // ── Sampling and snapshots ────────────────────────────────────────────

    /// Evaluate the kinetics at the current controls and exposure.
    pub fn sample(&self) -> DegradationSample {
        self.engine.sample(&self.env, &self.clock)
    }

    pub fn visual_amplification(&self) -> f64 {
        self.engine.visual_amplification()
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            environment:      self.env,
            exposure:         self.clock.duration(),
            speed_multiplier: self.speed_multiplier,
            running:          self.running,
            progression:      self.progression.state(),
            sample:           self.sample(),
            history_len:      self.history.len(),
        }
    }

    // ── History ───────────────────────────────────────────────────────────

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Discard all recorded points and notify the observer.
    pub fn clear_history<O: SimObserver>(&mut self, observer: &mut O) {
        self.history.clear();
        observer.on_history_cleared();
    }

    // ── Imagery ───────────────────────────────────────────────────────────

    /// Install the pristine texture all frames derive from. Fails with
    /// [`ImageError::NotReady`](patina_image::ImageError::NotReady) on an
    /// empty buffer, keeping any previous source.
    pub fn set_source_image(&mut self, image: ImageBuffer) -> SimResult<()> {
        Ok(self.pipeline.set_source(image)?)
    }

    pub fn has_source_image(&self) -> bool {
        self.pipeline.has_source()
    }

    pub fn clear_source_image(&mut self) {
        self.pipeline.clear_source();
    }

    /// The most recently rendered frame, if any.
    pub fn current_frame(&self) -> Option<&ImageBuffer> {
        self.pipeline.frame()
    }

    /// Render a frame for the current state outside the tick cadence, e.g.
    /// after editing controls while paused.
    ///
    /// With no source image installed this produces no frame callback; the
    /// failure is returned and also surfaced through
    /// [`SimObserver::on_error`] so hosts can show a transient notice.
    pub fn refresh_frame<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let sample = self.engine.sample(&self.env, &self.clock);
        match self.pipeline.apply(sample.visual_degradation_fraction) {
            Ok(frame) => {
                observer.on_frame(frame);
                Ok(())
            }
            Err(err) => {
                let err = SimError::Image(err);
                debug!("frame refresh failed: {err}");
                observer.on_error(&err);
                Err(err)
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
