use crate::core::data::complex::Complex;
use crate::core::fractals::quadratic::iterates::Iterates;

/// Escape test for `z ↦ z² + parameter` seeded at `start`.
///
/// There is no radius test. A point counts as diverging once an iterate within
/// `max_depth` steps has a squared magnitude that floating point can no longer
/// represent: the next squaring would overflow, and any NaN component lands
/// here too. Slow escapes are therefore reported as bounded.
/// `max_depth == 0` is always `false`.
#[must_use]
pub fn diverges(start: Complex, parameter: Complex, max_depth: u32) -> bool {
    Iterates::new(start, parameter)
        .take(max_depth as usize)
        .any(has_overflowed)
}

#[inline]
fn has_overflowed(z: Complex) -> bool {
    !z.magnitude_squared().is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_never_diverges() {
        let samples = [
            Complex::ZERO,
            Complex::new(2.0, 0.0),
            Complex::new(1e300, -1e300),
            Complex::new(f64::MAX, f64::MAX),
        ];

        for start in samples {
            for parameter in samples {
                assert!(!diverges(start, parameter, 0));
            }
        }
    }

    #[test]
    fn origin_is_a_fixed_point() {
        for depth in [0, 1, 2, 50, 250, 10_000] {
            assert!(!diverges(Complex::ZERO, Complex::ZERO, depth));
        }
    }

    #[test]
    fn parameter_two_escapes_from_origin() {
        assert!(diverges(Complex::ZERO, Complex::new(2.0, 0.0), 10));
    }

    #[test]
    fn parameter_two_needs_enough_depth_to_overflow() {
        // 0, 2, 6, 38, 1446, ... z10 ≈ 1.8e202, whose square no longer fits
        assert!(!diverges(Complex::ZERO, Complex::new(2.0, 0.0), 3));
        assert!(!diverges(Complex::ZERO, Complex::new(2.0, 0.0), 9));
        assert!(diverges(Complex::ZERO, Complex::new(2.0, 0.0), 10));
    }

    #[test]
    fn slow_escape_needs_more_depth() {
        // 0.3 lies outside the set but creeps away slowly
        assert!(!diverges(Complex::ZERO, Complex::new(0.3, 0.0), 5));
        assert!(diverges(Complex::ZERO, Complex::new(0.3, 0.0), 50));
    }

    #[test]
    fn nan_start_diverges_on_first_step() {
        assert!(diverges(Complex::new(f64::NAN, 0.0), Complex::ZERO, 1));
    }

    #[test]
    fn main_cardioid_points_stay_bounded() {
        for parameter in [
            Complex::new(-1.0, 0.0),
            Complex::new(0.25, 0.0),
            Complex::new(-0.5, 0.3),
        ] {
            assert!(!diverges(Complex::ZERO, parameter, 250), "{parameter:?}");
        }
    }

    #[test]
    fn divergence_is_monotonic_in_depth() {
        let cases = [
            (Complex::ZERO, Complex::new(2.0, 0.0)),
            (Complex::ZERO, Complex::new(0.5, 0.5)),
            (Complex::new(1.5, 1.5), Complex::ZERO),
            (Complex::new(0.1, -0.2), Complex::new(-0.75, 0.1)),
        ];

        for (start, parameter) in cases {
            let mut flagged = false;
            for depth in 0..300 {
                let result = diverges(start, parameter, depth);
                if flagged {
                    assert!(result, "{start:?} {parameter:?} unflagged at depth {depth}");
                }
                flagged |= result;
            }
        }
    }

    #[test]
    fn huge_start_diverges_quickly() {
        assert!(diverges(Complex::new(1e200, 1e200), Complex::ZERO, 2));
    }
}
