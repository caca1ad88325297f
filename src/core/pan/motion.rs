use crate::core::data::complex::Complex;
use crate::core::pan::controls::HeldDirections;

/// Net pan displacement, counted in whole steps per axis.
///
/// Keeping integer step counts means the pan origin after `n` ticks is always
/// `base + n * step`, with no accumulated rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanOffset {
    pub real_steps: i64,
    pub imag_steps: i64,
}

impl PanOffset {
    #[must_use]
    pub fn apply(&self, base: Complex, step: f64) -> Complex {
        Complex {
            real: base.real + self.real_steps as f64 * step,
            imag: base.imag + self.imag_steps as f64 * step,
        }
    }
}

/// Advances the offset by one tick of held directions.
///
/// Left and up decrease their axis, right and down increase it; opposite
/// directions held together cancel. Returns whether the offset moved.
pub fn step_pan(offset: &mut PanOffset, held: HeldDirections) -> bool {
    let real = axis_from_pair(held.right, held.left);
    let imag = axis_from_pair(held.down, held.up);

    offset.real_steps += real;
    offset.imag_steps += imag;

    real != 0 || imag != 0
}

fn axis_from_pair(positive: bool, negative: bool) -> i64 {
    match (positive, negative) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    }
}
