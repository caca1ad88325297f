pub mod controls;
pub mod motion;

pub use controls::{Direction, HeldDirections};
pub use motion::{PanOffset, step_pan};
