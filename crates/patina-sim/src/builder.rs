//! Fluent construction of [`Simulation`]s.

use patina_core::{EnvironmentState, ExposureClock, ExposureDuration, ScenarioPreset};
use patina_image::{AgingCoefficients, AgingPipeline, ImageBuffer};
use patina_kinetics::{DegradationEngine, DEFAULT_VISUAL_AMPLIFICATION};

use crate::error::{SimError, SimResult};
use crate::history::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
use crate::progression::{ProgressionConfig, TimeProgression};
use crate::simulation::{Simulation, DEFAULT_SPEED, SPEED_MAX, SPEED_MIN};

/// Builder for a fully configured [`Simulation`].
///
/// Unlike the facade's setters, which clamp out-of-range input, the builder
/// rejects it: explicit configuration deserves an explicit error.
///
/// ```
/// use patina_core::ScenarioPreset;
/// use patina_sim::Simulation;
///
/// let sim = Simulation::builder()
///     .preset(ScenarioPreset::PoorStorage)
///     .speed_multiplier(4.0)
///     .history_capacity(500)
///     .build()?;
/// assert_eq!(sim.environment().temperature_c(), 30.0);
/// # Ok::<(), patina_sim::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    environment:          EnvironmentState,
    exposure:             ExposureDuration,
    speed_multiplier:     f64,
    visual_amplification: f64,
    coefficients:         AgingCoefficients,
    progression:          ProgressionConfig,
    history_capacity:     usize,
    source:               Option<ImageBuffer>,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            environment:          EnvironmentState::default(),
            exposure:             ExposureDuration::ZERO,
            speed_multiplier:     DEFAULT_SPEED,
            visual_amplification: DEFAULT_VISUAL_AMPLIFICATION,
            coefficients:         AgingCoefficients::default(),
            progression:          ProgressionConfig::default(),
            history_capacity:     DEFAULT_HISTORY_CAPACITY,
            source:               None,
        }
    }

    pub fn environment(mut self, env: EnvironmentState) -> Self {
        self.environment = env;
        self
    }

    pub fn exposure(mut self, duration: ExposureDuration) -> Self {
        self.exposure = duration;
        self
    }

    /// Start from a preset's environment and exposure.
    pub fn preset(mut self, preset: ScenarioPreset) -> Self {
        self.environment = preset.environment();
        self.exposure = preset.exposure();
        self
    }

    pub fn speed_multiplier(mut self, value: f64) -> Self {
        self.speed_multiplier = value;
        self
    }

    /// Amplification applied to the visual fraction; 1.0 disables it.
    pub fn visual_amplification(mut self, factor: f64) -> Self {
        self.visual_amplification = factor;
        self
    }

    pub fn coefficients(mut self, coefficients: AgingCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn progression(mut self, config: ProgressionConfig) -> Self {
        self.progression = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn source_image(mut self, image: ImageBuffer) -> Self {
        self.source = Some(image);
        self
    }

    /// Validate and assemble. The simulation comes back disabled and stopped;
    /// call [`Simulation::set_running`] and [`Simulation::start`] to play.
    pub fn build(self) -> SimResult<Simulation> {
        self.progression.validate()?;

        if !self.speed_multiplier.is_finite()
            || !(SPEED_MIN..=SPEED_MAX).contains(&self.speed_multiplier)
        {
            return Err(SimError::Config(format!(
                "speed multiplier {} outside {SPEED_MIN}..={SPEED_MAX}",
                self.speed_multiplier
            )));
        }
        if self.history_capacity == 0 {
            return Err(SimError::Config("history capacity must be at least 1".into()));
        }

        let engine = DegradationEngine::with_amplification(self.visual_amplification)?;

        let mut pipeline = AgingPipeline::with_coefficients(self.coefficients);
        if let Some(image) = self.source {
            pipeline.set_source(image)?;
        }

        Ok(Simulation::from_parts(
            self.environment,
            ExposureClock::with_duration(self.exposure),
            engine,
            pipeline,
            TimeProgression::new(self.progression),
            HistoryBuffer::with_capacity(self.history_capacity),
            self.speed_multiplier,
        ))
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
