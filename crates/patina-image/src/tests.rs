//! Unit tests for buffers and the aging transform.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::ImageBuffer;

/// Deterministic noise image for transform tests.
fn random_buffer(width: u32, height: u32, seed: u64) -> ImageBuffer {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    rng.fill_bytes(&mut pixels);
    ImageBuffer::new(width, height, pixels).unwrap()
}

#[cfg(test)]
mod buffer {
    use super::random_buffer;
    use crate::{ImageBuffer, ImageError};

    #[test]
    fn new_validates_pixel_length() {
        assert!(ImageBuffer::new(2, 2, vec![0; 16]).is_ok());

        let err = ImageBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        match err {
            ImageError::DimensionMismatch { width, height, expected, got } => {
                assert_eq!((width, height), (2, 2));
                assert_eq!(expected, 16);
                assert_eq!(got, 15);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn filled_sets_every_pixel() {
        let img = ImageBuffer::filled(3, 2, [10, 20, 30, 255]);
        assert_eq!(img.pixel_count(), 6);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(img.pixel(x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn zero_sized_buffers_are_empty() {
        assert!(ImageBuffer::filled(0, 0, [0; 4]).is_empty());
        assert!(ImageBuffer::new(0, 5, vec![]).unwrap().is_empty());
        assert!(!random_buffer(1, 1, 0).is_empty());
    }

    #[test]
    fn into_pixels_roundtrip() {
        let img = random_buffer(4, 3, 7);
        let copy = img.clone();
        let raw = img.into_pixels();
        assert_eq!(raw.len(), 48);
        assert_eq!(ImageBuffer::new(4, 3, raw).unwrap(), copy);
    }
}

#[cfg(test)]
mod transform {
    use super::random_buffer;
    use crate::{AgingCoefficients, AgingPipeline, ImageBuffer, ImageError};

    /// The documented per-channel formula, written out independently of the
    /// production kernel.  Byte-exact because both sides use the same f32
    /// operation order.
    fn reference_pixel(px: [u8; 4], v: f32) -> [u8; 4] {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        let gray = (r + g + b) / 3.0;
        let fade = 1.0 - v;
        let yellow = v * 60.0;
        let darken = 1.0 - 0.25 * v;
        let ch = |c: f32, gain: f32| {
            ((c * fade + gray * (1.0 - fade) + gain * yellow).clamp(0.0, 255.0) * darken).round()
                as u8
        };
        [ch(r, 0.8), ch(g, 0.4), ch(b, -0.6), px[3]]
    }

    fn pipeline_with(source: ImageBuffer) -> AgingPipeline {
        let mut p = AgingPipeline::new();
        p.set_source(source).unwrap();
        p
    }

    #[test]
    fn zero_fraction_is_pixel_identical() {
        let src = random_buffer(64, 48, 1);
        let mut p = pipeline_with(src.clone());
        let out = p.apply(0.0).unwrap();
        assert_eq!(out.as_bytes(), src.as_bytes());
    }

    #[test]
    fn hand_pinned_pixels() {
        // (input, fraction, expected) — worked through the formula by hand.
        let cases: [([u8; 4], f64, [u8; 4]); 7] = [
            ([200, 120, 40, 255], 0.5, [161, 116, 54, 255]),
            ([200, 120, 40, 7], 1.0, [126, 108, 63, 7]),
            ([255, 255, 255, 255], 1.0, [191, 191, 164, 255]),
            ([0, 0, 0, 255], 1.0, [36, 18, 0, 255]),
            ([10, 250, 30, 128], 1.0, [108, 91, 46, 128]),
            ([90, 60, 200, 255], 0.25, [102, 75, 160, 255]),
            ([17, 133, 250, 3], 0.75, [114, 123, 110, 3]),
        ];
        for (input, fraction, expected) in cases {
            let mut p = pipeline_with(ImageBuffer::filled(1, 1, input));
            let out = p.apply(fraction).unwrap();
            assert_eq!(out.pixel(0, 0), expected, "pixel {input:?} at v = {fraction}");
        }
    }

    #[test]
    fn full_degradation_matches_reference_formula() {
        let src = random_buffer(32, 32, 2);
        let mut p = pipeline_with(src.clone());
        let out = p.apply(1.0).unwrap();
        for (s, d) in src.as_bytes().chunks_exact(4).zip(out.as_bytes().chunks_exact(4)) {
            let expected = reference_pixel([s[0], s[1], s[2], s[3]], 1.0);
            assert_eq!(d, expected);
        }
    }

    #[test]
    fn intermediate_fraction_matches_reference_formula() {
        let src = random_buffer(32, 32, 3);
        let mut p = pipeline_with(src.clone());
        let out = p.apply(0.37).unwrap();
        for (s, d) in src.as_bytes().chunks_exact(4).zip(out.as_bytes().chunks_exact(4)) {
            let expected = reference_pixel([s[0], s[1], s[2], s[3]], 0.37);
            assert_eq!(d, expected);
        }
    }

    #[test]
    fn full_degradation_desaturates_completely() {
        // With the yellow and darken terms switched off, v = 1 leaves pure
        // grayscale: all three channels collapse to the same value.
        let co = AgingCoefficients {
            yellow_shift_max: 0.0,
            darken_max:       0.0,
            ..Default::default()
        };
        let src = random_buffer(16, 16, 4);
        let mut p = AgingPipeline::with_coefficients(co);
        p.set_source(src).unwrap();
        let out = p.apply(1.0).unwrap();
        for px in out.as_bytes().chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn repeated_application_does_not_drift() {
        let src = random_buffer(24, 24, 5);
        let mut p = pipeline_with(src);

        let first = p.apply(0.7).unwrap().as_bytes().to_vec();
        p.apply(0.2).unwrap();
        let third = p.apply(0.7).unwrap().as_bytes().to_vec();
        assert_eq!(first, third, "transform must always read the pristine source");
    }

    #[test]
    fn alpha_channel_is_untouched() {
        let src = random_buffer(16, 16, 6);
        let mut p = pipeline_with(src.clone());
        let out = p.apply(0.83).unwrap();
        for (s, d) in src.as_bytes().chunks_exact(4).zip(out.as_bytes().chunks_exact(4)) {
            assert_eq!(s[3], d[3]);
        }
    }

    #[test]
    fn missing_source_reports_not_ready() {
        let mut p = AgingPipeline::new();
        assert!(matches!(p.apply(0.5), Err(ImageError::NotReady)));
        assert!(p.frame().is_none());
        assert!(matches!(p.reset(), Err(ImageError::NotReady)));
    }

    #[test]
    fn rejected_source_swap_keeps_previous_state() {
        let src = random_buffer(8, 8, 7);
        let mut p = pipeline_with(src.clone());
        let before = p.apply(0.5).unwrap().as_bytes().to_vec();

        let err = p.set_source(ImageBuffer::filled(0, 0, [0; 4])).unwrap_err();
        assert_eq!(err, ImageError::NotReady);

        // Old source and old frame both survive the failed swap.
        assert!(p.has_source());
        assert_eq!(p.frame().map(|f| f.as_bytes().to_vec()), Some(before.clone()));
        assert_eq!(p.apply(0.5).unwrap().as_bytes(), &before[..]);
    }

    #[test]
    fn new_source_invalidates_old_frame() {
        let mut p = pipeline_with(random_buffer(8, 8, 8));
        p.apply(1.0).unwrap();
        p.set_source(random_buffer(4, 4, 9)).unwrap();
        assert!(p.frame().is_none());
        assert_eq!(p.apply(0.0).unwrap().width(), 4);
    }

    #[test]
    fn reset_hands_back_the_pristine_source() {
        let src = random_buffer(8, 8, 10);
        let mut p = pipeline_with(src.clone());
        p.apply(1.0).unwrap();

        let pristine = p.reset().unwrap();
        assert_eq!(pristine.as_bytes(), src.as_bytes());
        assert!(p.frame().is_none());
        assert!(p.has_source());
    }

    #[test]
    fn wild_fractions_are_clamped() {
        let src = random_buffer(8, 8, 11);
        let mut p = pipeline_with(src.clone());

        let at_one = p.apply(1.0).unwrap().as_bytes().to_vec();
        assert_eq!(p.apply(7.3).unwrap().as_bytes(), &at_one[..]);
        assert_eq!(p.apply(-2.0).unwrap().as_bytes(), src.as_bytes());
        assert_eq!(p.apply(f64::NAN).unwrap().as_bytes(), src.as_bytes());
    }
}
