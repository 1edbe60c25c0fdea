//! Time-driven pulsation signal

/// Map elapsed time (seconds) to a sine oscillation remapped into [0, 1].
///
/// 0.5 at `t = 0`, peaks at π/2, bottoms out at 3π/2, period 2π. The caller
/// supplies the time on every call; nothing here keeps a clock.
#[inline]
pub fn pulsate(time: f32) -> f32 {
    (time.sin() + 1.0) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI, TAU};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pulse_reference_points() {
        assert_eq!(pulsate(0.0), 0.5);
        assert_abs_diff_eq!(pulsate(HALF_PI), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pulsate(PI + HALF_PI), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pulse_stays_in_unit_range() {
        for i in -2000..2000 {
            let t = i as f32 * 0.037;
            let p = pulsate(t);
            assert!((0.0..=1.0).contains(&p), "pulsate({t}) = {p}");
        }
    }

    #[test]
    fn test_pulse_period() {
        for i in 0..100 {
            let t = i as f32 * 0.173;
            assert_abs_diff_eq!(pulsate(t), pulsate(t + TAU), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_non_finite_time_yields_nan() {
        assert!(pulsate(f32::INFINITY).is_nan());
        assert!(pulsate(f32::NAN).is_nan());
    }
}
