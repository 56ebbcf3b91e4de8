//! Environmental state: temperature, relative humidity, and light intensity.
//!
//! # Design
//!
//! All mutation goes through clamping setters.  Out-of-range values are
//! pulled back to the named physical bounds below (and non-finite values to
//! the lower bound) instead of being rejected, so the simulation stays
//! renderable no matter what a host UI feeds it.  Each clamp is logged at
//! `debug` level; nothing here returns an error.
//!
//! The conservator's comfort bands ([`TemperatureBand`], [`HumidityBand`])
//! are coarse classifications for host UIs.  They have no effect on the
//! kinetics.

use std::fmt;

use log::debug;

// ── Physical bounds ───────────────────────────────────────────────────────────

/// Lowest accepted air temperature, °C.
pub const TEMPERATURE_MIN_C: f64 = -10.0;
/// Highest accepted air temperature, °C.
pub const TEMPERATURE_MAX_C: f64 = 40.0;
/// Relative humidity floor, percent.
pub const HUMIDITY_MIN_PCT: f64 = 0.0;
/// Relative humidity ceiling, percent.
pub const HUMIDITY_MAX_PCT: f64 = 100.0;
/// Light intensity floor, kilolux.  0 is total darkness.
pub const LIGHT_MIN_KLUX: f64 = 0.0;
/// Light intensity ceiling, kilolux.  50 klux ≈ direct daylight indoors.
pub const LIGHT_MAX_KLUX: f64 = 50.0;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Clamp `value` into `[min, max]`, mapping non-finite inputs to `min`.
fn clamped(value: f64, min: f64, max: f64, what: &'static str) -> f64 {
    if !value.is_finite() {
        debug!("{what} {value} is not finite; using {min}");
        return min;
    }
    let c = value.clamp(min, max);
    if c != value {
        debug!("{what} {value} outside [{min}, {max}]; clamped to {c}");
    }
    c
}

// ── EnvironmentState ──────────────────────────────────────────────────────────

/// The environmental conditions an artifact is exposed to.
///
/// Temperature and humidity are set by the host and never advanced by time;
/// only exposure duration (and, in scenario presets, light) is
/// scenario-driven.  Defaults to benign museum conditions: 20 °C, 50 % RH,
/// darkness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentState {
    temperature_c: f64,
    humidity_pct:  f64,
    light_klux:    f64,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            humidity_pct:  50.0,
            light_klux:    0.0,
        }
    }
}

impl EnvironmentState {
    /// Build a state from raw values, clamping each into its physical range.
    pub fn new(temperature_c: f64, humidity_pct: f64, light_klux: f64) -> Self {
        let mut env = Self::default();
        env.set_temperature_c(temperature_c);
        env.set_humidity_pct(humidity_pct);
        env.set_light_klux(light_klux);
        env
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    #[inline]
    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    #[inline]
    pub fn light_klux(&self) -> f64 {
        self.light_klux
    }

    /// Temperature on the Kelvin scale, as consumed by the kinetics.
    #[inline]
    pub fn temperature_k(&self) -> f64 {
        self.temperature_c + KELVIN_OFFSET
    }

    /// Temperature on the Fahrenheit scale, for hosts with a °F toggle.
    #[inline]
    pub fn temperature_f(&self) -> f64 {
        self.temperature_c * 9.0 / 5.0 + 32.0
    }

    /// Relative humidity as a fraction in [0, 1].
    #[inline]
    pub fn humidity_fraction(&self) -> f64 {
        self.humidity_pct / 100.0
    }

    // ── Mutators (clamping) ───────────────────────────────────────────────

    pub fn set_temperature_c(&mut self, value: f64) {
        self.temperature_c = clamped(value, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C, "temperature °C");
    }

    /// Set the temperature from a Fahrenheit reading.
    pub fn set_temperature_f(&mut self, value: f64) {
        self.set_temperature_c((value - 32.0) * 5.0 / 9.0);
    }

    pub fn set_humidity_pct(&mut self, value: f64) {
        self.humidity_pct = clamped(value, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, "humidity %RH");
    }

    pub fn set_light_klux(&mut self, value: f64) {
        self.light_klux = clamped(value, LIGHT_MIN_KLUX, LIGHT_MAX_KLUX, "light klux");
    }

    // ── Classification ────────────────────────────────────────────────────

    /// Coarse conservation assessment of the current temperature.
    pub fn temperature_band(&self) -> TemperatureBand {
        let t = self.temperature_c;
        if t < 10.0 {
            TemperatureBand::TooCold
        } else if t < 18.0 {
            TemperatureBand::Cold
        } else if t < 22.0 {
            TemperatureBand::Optimal
        } else if t < 28.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::TooHot
        }
    }

    /// Coarse conservation assessment of the current humidity.
    pub fn humidity_band(&self) -> HumidityBand {
        let h = self.humidity_pct;
        if h < 30.0 {
            HumidityBand::TooDry
        } else if h < 40.0 {
            HumidityBand::Dry
        } else if h < 60.0 {
            HumidityBand::Optimal
        } else if h < 70.0 {
            HumidityBand::Humid
        } else {
            HumidityBand::TooHumid
        }
    }
}

impl fmt::Display for EnvironmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}°C {:.0}%RH {:.2}klux",
            self.temperature_c, self.humidity_pct, self.light_klux
        )
    }
}

// ── Bands ─────────────────────────────────────────────────────────────────────

/// Conservation comfort band for temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureBand {
    TooCold,
    Cold,
    Optimal,
    Warm,
    TooHot,
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemperatureBand::TooCold => "too cold",
            TemperatureBand::Cold    => "cold",
            TemperatureBand::Optimal => "optimal",
            TemperatureBand::Warm    => "warm",
            TemperatureBand::TooHot  => "too hot",
        };
        f.write_str(s)
    }
}

/// Conservation comfort band for relative humidity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumidityBand {
    TooDry,
    Dry,
    Optimal,
    Humid,
    TooHumid,
}

impl fmt::Display for HumidityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HumidityBand::TooDry   => "too dry",
            HumidityBand::Dry      => "dry",
            HumidityBand::Optimal  => "optimal",
            HumidityBand::Humid    => "humid",
            HumidityBand::TooHumid => "too humid",
        };
        f.write_str(s)
    }
}
