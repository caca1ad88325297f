use crate::core::data::screen_point::ScreenPoint;
use crate::core::pan::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(ScreenPoint),
    /// Vertical wheel delta; negative scrolls up.
    Wheel { delta_y: f64 },
    KeyDown(Direction),
    KeyUp(Direction),
    ToggleMode,
}
