use std::iter;

use crate::core::data::complex::Complex;
use crate::core::fractals::quadratic::iterates::Iterates;

/// The seed followed by up to `budget` iterates of `z ↦ z² + parameter`.
///
/// Stops before the first iterate with a NaN component, so every returned
/// point is drawable. Infinite iterates are kept: they still map to a screen
/// position, and the segment clipping drops lines that never reach the
/// surface. [`diverges`](super::diverges) already reports such an orbit as
/// escaping. The result is never empty.
#[must_use]
pub fn orbit(start: Complex, parameter: Complex, budget: u32) -> Vec<Complex> {
    iter::once(start)
        .chain(
            Iterates::new(start, parameter)
                .take(budget as usize)
                .take_while(|z| !z.has_nan()),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_just_the_seed() {
        let seed = Complex::new(0.3, -0.4);
        assert_eq!(orbit(seed, Complex::new(2.0, 0.0), 0), vec![seed]);
    }

    #[test]
    fn bounded_orbit_has_budget_plus_one_points() {
        let points = orbit(Complex::ZERO, Complex::new(-1.0, 0.0), 5);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Complex::ZERO);
        assert_eq!(points[1], Complex::new(-1.0, 0.0));
        assert_eq!(points[5], Complex::new(-1.0, 0.0));
    }

    #[test]
    fn orbit_stops_before_nan_term() {
        let points = orbit(Complex::ZERO, Complex::new(2.0, 0.0), 50);

        assert!(points.len() < 51);
        assert!(points.iter().all(|z| !z.has_nan()));
        assert_eq!(&points[..4], &[
            Complex::ZERO,
            Complex::new(2.0, 0.0),
            Complex::new(6.0, 0.0),
            Complex::new(38.0, 0.0),
        ]);
    }

    #[test]
    fn orbit_keeps_infinite_but_not_nan_terms() {
        // A purely real orbit first overflows to +inf; squaring that yields
        // inf * 0 = NaN in the imaginary part one step later.
        let points = orbit(Complex::new(1e200, 0.0), Complex::ZERO, 3);

        assert_eq!(points.len(), 2);
        assert!(points[1].real.is_infinite());
        assert_eq!(points[1].imag, 0.0);
    }

    #[test]
    fn overflowed_term_is_drawn_and_reported_as_diverging() {
        let start = Complex::new(1e155, 0.0);

        let points = orbit(start, Complex::ZERO, 1);

        assert_eq!(points.len(), 2);
        assert!(points[1].real.is_infinite());
        assert!(crate::core::fractals::quadratic::diverges(start, Complex::ZERO, 1));
    }
}
