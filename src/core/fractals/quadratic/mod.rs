//! Escape-time iteration of the quadratic family `z ↦ z² + c`.

pub mod divergence;
pub mod iterates;
pub mod orbit;

pub use divergence::diverges;
pub use iterates::Iterates;
pub use orbit::orbit;
