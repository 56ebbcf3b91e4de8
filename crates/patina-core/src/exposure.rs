//! Exposure time model.
//!
//! # Design
//!
//! Exposure is held as three independently adjustable magnitudes (days,
//! months, years) because that is how hosts present it: three sliders with
//! separate ranges.  The canonical scalar is
//!
//!   total_days = days + months · 30.44 + years · 365.25
//!
//! Direct edits via the `set_*` methods never normalize — a host setting
//! `days = 400` sees `400` back.  Only [`ExposureClock::advance`], the
//! tick-driven path, folds days into months and months into years to keep
//! the displayed magnitudes bounded.
//!
//! Folding must never change `total_days`.  Days→months is exact by
//! construction (one month weighs exactly 30.44 days).  Months→years
//! converts at `365.25 / 30.44` months per year rather than a flat 12:
//! a flat 12 would make each folded year weigh 365.28 days and silently
//! leak 0.03 days per fold into the total.

use std::fmt;

use log::debug;

// ── Calendar weights ──────────────────────────────────────────────────────────

/// Mean Gregorian month length in days.
pub const DAYS_PER_MONTH: f64 = 30.44;
/// Julian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Months per year at the weights above (≈ 12.001).  The fold threshold.
pub const MONTHS_PER_YEAR: f64 = DAYS_PER_YEAR / DAYS_PER_MONTH;

/// Pass `value` through if it is a finite non-negative number, else 0.
fn nonneg(value: f64, what: &'static str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        debug!("{what} {value} is not a non-negative number; using 0");
        0.0
    }
}

// ── ExposureDuration ──────────────────────────────────────────────────────────

/// An exposure span decomposed into days, months, and years.
///
/// Plain data: all components are ≥ 0 when produced by [`ExposureClock`],
/// but the type itself does not enforce it (presets and snapshots construct
/// it literally).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureDuration {
    pub days:   f64,
    pub months: f64,
    pub years:  f64,
}

impl ExposureDuration {
    pub const ZERO: ExposureDuration = ExposureDuration {
        days:   0.0,
        months: 0.0,
        years:  0.0,
    };

    pub fn from_days(days: f64) -> Self {
        Self { days, ..Self::ZERO }
    }

    pub fn from_months(months: f64) -> Self {
        Self { months, ..Self::ZERO }
    }

    pub fn from_years(years: f64) -> Self {
        Self { years, ..Self::ZERO }
    }

    /// The canonical scalar all kinetics run on.
    #[inline]
    pub fn total_days(&self) -> f64 {
        self.days + self.months * DAYS_PER_MONTH + self.years * DAYS_PER_YEAR
    }

    /// Total exposure expressed in Julian years.
    #[inline]
    pub fn total_years(&self) -> f64 {
        self.total_days() / DAYS_PER_YEAR
    }
}

impl fmt::Display for ExposureDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}y {:.2}mo {:.2}d (≈ {:.1} days)",
            self.years,
            self.months,
            self.days,
            self.total_days()
        )
    }
}

// ── ExposureClock ─────────────────────────────────────────────────────────────

/// Mutable owner of the exposure duration.
///
/// Enforces the non-negativity invariant on every write and is the only
/// type allowed to normalize components (via [`advance`][Self::advance],
/// called from scheduler ticks).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureClock {
    duration: ExposureDuration,
}

impl ExposureClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing duration, sanitizing each component.
    pub fn with_duration(duration: ExposureDuration) -> Self {
        Self {
            duration: ExposureDuration {
                days:   nonneg(duration.days, "exposure days"),
                months: nonneg(duration.months, "exposure months"),
                years:  nonneg(duration.years, "exposure years"),
            },
        }
    }

    #[inline]
    pub fn duration(&self) -> ExposureDuration {
        self.duration
    }

    #[inline]
    pub fn total_days(&self) -> f64 {
        self.duration.total_days()
    }

    // ── Direct edits (no normalization) ───────────────────────────────────

    pub fn set_days(&mut self, days: f64) {
        self.duration.days = nonneg(days, "exposure days");
    }

    pub fn set_months(&mut self, months: f64) {
        self.duration.months = nonneg(months, "exposure months");
    }

    pub fn set_years(&mut self, years: f64) {
        self.duration.years = nonneg(years, "exposure years");
    }

    /// Replace the whole duration (sanitized), e.g. when applying a preset.
    pub fn set_duration(&mut self, duration: ExposureDuration) {
        *self = Self::with_duration(duration);
    }

    /// Zero all components.
    pub fn reset(&mut self) {
        self.duration = ExposureDuration::ZERO;
    }

    // ── Tick-driven advance ───────────────────────────────────────────────

    /// Add `delta_days` of exposure, then fold oversized components.
    ///
    /// Non-positive or non-finite deltas are ignored.  Scheduler ticks are
    /// the only intended caller.
    pub fn advance(&mut self, delta_days: f64) {
        if !(delta_days > 0.0) {
            if delta_days != 0.0 {
                debug!("ignoring exposure advance of {delta_days} days");
            }
            return;
        }

        self.duration.days += delta_days;

        if self.duration.days >= DAYS_PER_MONTH {
            let whole = (self.duration.days / DAYS_PER_MONTH).floor();
            self.duration.days -= whole * DAYS_PER_MONTH;
            self.duration.months += whole;
        }
        if self.duration.months >= MONTHS_PER_YEAR {
            let whole = (self.duration.months / MONTHS_PER_YEAR).floor();
            self.duration.months -= whole * MONTHS_PER_YEAR;
            self.duration.years += whole;
        }
    }
}

impl fmt::Display for ExposureClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.duration.fmt(f)
    }
}
