use crate::core::data::complex::Complex;

/// Successive iterates of `z ↦ z² + c`, excluding the seed.
#[derive(Debug, Clone, Copy)]
pub struct Iterates {
    z: Complex,
    parameter: Complex,
}

impl Iterates {
    #[must_use]
    pub fn new(seed: Complex, parameter: Complex) -> Self {
        Self { z: seed, parameter }
    }
}

impl Iterator for Iterates {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        self.z = self.z.square_plus(self.parameter);
        Some(self.z)
    }
}
