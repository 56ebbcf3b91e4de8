//! Unit tests for the kinetics model and degradation engine.

/// Relative-tolerance comparison for transcendental results.
fn assert_close(got: f64, want: f64, rel: f64) {
    let tol = want.abs() * rel;
    assert!(
        (got - want).abs() <= tol,
        "expected {want} ± {tol}, got {got}"
    );
}

#[cfg(test)]
mod model {
    use patina_core::{EnvironmentState, KELVIN_OFFSET};
    use proptest::prelude::*;

    use super::assert_close;
    use crate::model::{
        moisture_content, rate_constant, rate_constant_for, EA_DARK, GAS_CONSTANT, K0_DARK,
        MOISTURE_EXPONENT,
    };

    #[test]
    fn moisture_reference_points() {
        // (rh_fraction, t_kelvin, expected)
        let refs = [
            (0.5, 293.15, 253.6130974586817),
            (0.01, 263.15, 1_887_694.6724841085),
            (0.99, 313.15, 22.4639294996407),
            (0.5, 273.15, 1093.4049906042244),
            (0.95, 293.15, 60.965711524647205),
        ];
        for (rh, t, want) in refs {
            assert_close(moisture_content(rh, t), want, 1e-9);
        }
    }

    #[test]
    fn rh_is_clamped_before_the_log() {
        let t = 293.15;
        assert_eq!(moisture_content(0.0, t), moisture_content(0.01, t));
        assert_eq!(moisture_content(-3.0, t), moisture_content(0.01, t));
        assert_eq!(moisture_content(1.0, t), moisture_content(0.999, t));
    }

    #[test]
    fn museum_rate_reference() {
        assert_close(rate_constant(20.0, 50.0, 0.15), 5.334068101768723e-7, 1e-12);
    }

    #[test]
    fn dark_rate_is_tiny_but_positive() {
        let k = rate_constant(20.0, 50.0, 0.0);
        assert!(k > 0.0);
        assert_close(k, 2.818426809692492e-15, 1e-12);
    }

    #[test]
    fn light_term_is_exactly_zero_in_darkness() {
        let t_kelvin = 20.0 + KELVIN_OFFSET;
        let h2o = moisture_content(0.5, t_kelvin);
        let h2o_term = h2o.abs().powf(MOISTURE_EXPONENT);
        let dark_only = K0_DARK * h2o_term * (-EA_DARK / (GAS_CONSTANT * t_kelvin)).exp();

        // Bit-identical to the dark pathway alone, not just close.
        assert_eq!(rate_constant(20.0, 50.0, 0.0), dark_only);

        // And any positive light strictly adds.
        assert!(rate_constant(20.0, 50.0, 1e-9) > dark_only);
    }

    #[test]
    fn env_wrapper_matches_raw_call() {
        let env = EnvironmentState::new(25.0, 60.0, 10.0);
        assert_eq!(rate_constant_for(&env), rate_constant(25.0, 60.0, 10.0));
    }

    proptest! {
        #[test]
        fn moisture_finite_nonneg(rh in 0.0001f64..0.9999, t_c in -10.0f64..40.0) {
            let m = moisture_content(rh, t_c + KELVIN_OFFSET);
            prop_assert!(m.is_finite() && m >= 0.0, "moisture {m} at rh={rh} t={t_c}");
        }

        #[test]
        fn rate_finite_nonneg(
            t_c in -10.0f64..40.0,
            rh in 0.0f64..100.0,
            light in 0.0f64..50.0,
        ) {
            let k = rate_constant(t_c, rh, light);
            prop_assert!(k.is_finite() && k >= 0.0, "k = {k}");
        }

        #[test]
        fn rate_monotonic_in_light(
            t_c in -10.0f64..40.0,
            rh in 0.0f64..100.0,
            a in 0.0f64..50.0,
            b in 0.0f64..50.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rate_constant(t_c, rh, lo) <= rate_constant(t_c, rh, hi));
        }
    }
}

#[cfg(test)]
mod engine {
    use patina_core::{ExposureClock, ScenarioPreset};
    use proptest::prelude::*;

    use super::assert_close;
    use crate::{DegradationEngine, KineticsError};

    #[test]
    fn zero_exposure_is_zero_degradation_everywhere() {
        let engine = DegradationEngine::new();
        for preset in ScenarioPreset::ALL {
            let sample = engine.sample_at(&preset.environment(), 0.0);
            assert_eq!(sample.degradation_fraction, 0.0, "{preset}");
            assert_eq!(sample.visual_degradation_fraction, 0.0, "{preset}");
        }
    }

    #[test]
    fn museum_scenario_regression() {
        let preset = ScenarioPreset::Museum;
        let clock = ExposureClock::with_duration(preset.exposure());
        let sample = DegradationEngine::new().sample(&preset.environment(), &clock);

        assert!(sample.degradation_fraction > 0.0 && sample.degradation_fraction < 1.0);
        // Pinned to six significant digits against the model formula.
        assert_close(sample.degradation_fraction, 0.019294122802090863, 1e-6);
        assert_close(sample.rate_constant, 5.334068101768723e-7, 1e-9);
        assert_close(sample.degradation_percent(), 1.9294122802090863, 1e-6);
        assert_close(sample.color_remaining_percent(), 98.07058771979092, 1e-6);
    }

    #[test]
    fn preset_degradation_table() {
        // Regression pins for every scenario in the fixed table.
        let expected = [
            (ScenarioPreset::Museum, 0.019294122802090863),
            (ScenarioPreset::PoorStorage, 0.11170445276916607),
            (ScenarioPreset::Outdoor, 0.18390092632465804),
            (ScenarioPreset::Extreme, 0.04798459608127359),
            (ScenarioPreset::OneMonth, 0.0005546669836318241),
            (ScenarioPreset::OneYear, 0.006635192865582784),
            (ScenarioPreset::TenYears, 0.06440541889434159),
        ];
        let engine = DegradationEngine::new();
        for (preset, want) in expected {
            let clock = ExposureClock::with_duration(preset.exposure());
            let sample = engine.sample(&preset.environment(), &clock);
            assert_close(sample.degradation_fraction, want, 1e-9);
        }
    }

    #[test]
    fn visual_fraction_is_amplified_and_capped() {
        let engine = DegradationEngine::new();

        // Museum: 10× amplification stays below the cap.
        let museum = ScenarioPreset::Museum;
        let clock = ExposureClock::with_duration(museum.exposure());
        let sample = engine.sample(&museum.environment(), &clock);
        assert_eq!(
            sample.visual_degradation_fraction,
            (sample.degradation_fraction * 10.0).min(1.0)
        );
        assert!(sample.visual_degradation_fraction < 1.0);

        // Poor storage: 11% scientific → saturates the visual channel.
        let poor = ScenarioPreset::PoorStorage;
        let clock = ExposureClock::with_duration(poor.exposure());
        let sample = engine.sample(&poor.environment(), &clock);
        assert_eq!(sample.visual_degradation_fraction, 1.0);
        assert!(sample.degradation_fraction < 0.2, "scientific value untouched");
    }

    #[test]
    fn unit_amplification_passes_through() {
        let engine = DegradationEngine::with_amplification(1.0).unwrap();
        let preset = ScenarioPreset::TenYears;
        let clock = ExposureClock::with_duration(preset.exposure());
        let sample = engine.sample(&preset.environment(), &clock);
        assert_eq!(sample.visual_degradation_fraction, sample.degradation_fraction);
    }

    #[test]
    fn invalid_amplification_is_rejected() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = DegradationEngine::with_amplification(bad).unwrap_err();
            assert!(matches!(err, KineticsError::InvalidAmplification(_)));
        }
    }

    #[test]
    fn fraction_sanitizes_pathological_rates() {
        // Zero exposure wins over everything, even NaN rates.
        assert_eq!(DegradationEngine::fraction(f64::NAN, 0.0), 0.0);
        assert_eq!(DegradationEngine::fraction(f64::INFINITY, 0.0), 0.0);
        // NaN rate with real exposure saturates instead of propagating.
        assert_eq!(DegradationEngine::fraction(f64::NAN, 5.0), 1.0);
        // An infinite rate is total degradation.
        assert_eq!(DegradationEngine::fraction(f64::INFINITY, 5.0), 1.0);
        // A (physically impossible) negative rate clamps at zero.
        assert_eq!(DegradationEngine::fraction(-1.0, 5.0), 0.0);
    }

    proptest! {
        #[test]
        fn fraction_always_in_unit_interval(k in 0.0f64..1.0, t in 0.0f64..1e9) {
            let f = DegradationEngine::fraction(k, t);
            prop_assert!((0.0..=1.0).contains(&f), "fraction {f} for k={k} t={t}");
        }
    }
}
