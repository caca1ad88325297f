/// A position on the drawing surface in pixels, origin top-left, y-down.
///
/// Coordinates stay fractional so sub-pixel cursor positions survive the round
/// trip through plane space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
