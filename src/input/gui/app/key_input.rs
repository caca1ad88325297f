use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::interactive::events::input::InputEvent;
use crate::core::pan::Direction;

#[must_use]
pub fn direction_for(key_code: KeyCode) -> Option<Direction> {
    match key_code {
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        _ => None,
    }
}

/// Arrow presses and releases become held-direction events. Auto-repeat is
/// dropped since the direction is already held.
#[must_use]
pub fn input_event_for(key_code: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
    let direction = direction_for(key_code)?;

    match state {
        ElementState::Pressed if repeat => None,
        ElementState::Pressed => Some(InputEvent::KeyDown(direction)),
        ElementState::Released => Some(InputEvent::KeyUp(direction)),
    }
}

/// Releases every direction, for when the window loses focus and key-up
/// events would never arrive.
pub fn release_all() -> impl Iterator<Item = InputEvent> {
    Direction::ALL.into_iter().map(InputEvent::KeyUp)
}
