use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::core::data::complex::Complex;
use crate::core::pan::{Direction, HeldDirections, PanOffset, step_pan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Live orbit of the cursor point, redrawn every tick.
    #[default]
    Interactive,
    /// One full-resolution pass over the surface, then idle.
    StillRender,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Interactive => Self::StillRender,
            Self::StillRender => Self::Interactive,
        }
    }
}

/// Everything the explorer remembers between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pan_base: Complex,
    pan_offset: PanOffset,
    pan_step: f64,
    iteration_budget: u32,
    max_iteration_budget: u32,
    mode: Mode,
    has_rendered_still: bool,
    cursor: Option<Complex>,
    held: HeldDirections,
}

impl SessionState {
    #[must_use]
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            pan_base: config.initial_pan_origin,
            pan_offset: PanOffset::default(),
            pan_step: config.pan_step,
            iteration_budget: config.initial_iteration_budget.min(config.max_iteration_budget),
            max_iteration_budget: config.max_iteration_budget,
            mode: Mode::default(),
            has_rendered_still: false,
            cursor: None,
            held: HeldDirections::default(),
        }
    }

    /// The parameter `c` of the map, moved by the arrow keys.
    #[must_use]
    pub fn pan_origin(&self) -> Complex {
        self.pan_offset.apply(self.pan_base, self.pan_step)
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn has_rendered_still(&self) -> bool {
        self.has_rendered_still
    }

    /// Plane position of the last observed pointer, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Complex> {
        self.cursor
    }

    #[must_use]
    pub fn held(&self) -> HeldDirections {
        self.held
    }

    pub fn set_cursor(&mut self, point: Complex) {
        self.cursor = Some(point);
    }

    /// Returns whether the budget changed.
    pub fn increment_budget(&mut self) -> bool {
        if self.iteration_budget < self.max_iteration_budget {
            self.iteration_budget += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the budget changed.
    pub fn decrement_budget(&mut self) -> bool {
        if self.iteration_budget > 0 {
            self.iteration_budget -= 1;
            true
        } else {
            false
        }
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.has_rendered_still = false;
        self.mode
    }

    pub fn mark_still_rendered(&mut self) {
        self.has_rendered_still = true;
    }

    pub fn invalidate_still(&mut self) {
        self.has_rendered_still = false;
    }

    pub fn set_direction(&mut self, direction: Direction, held: bool) {
        self.held.set(direction, held);
    }

    /// One pan tick. Runs in either mode; returns whether the origin moved.
    pub fn pan_tick(&mut self) -> bool {
        step_pan(&mut self.pan_offset, self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::{Mode, SessionState};
    use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
    use crate::core::data::complex::Complex;
    use crate::core::pan::Direction;

    fn session() -> SessionState {
        SessionState::new(&ExplorerConfig::default())
    }

    #[test]
    fn new_session_matches_config_defaults() {
        let session = session();

        assert_eq!(session.pan_origin(), Complex::ZERO);
        assert_eq!(session.iteration_budget(), 5);
        assert_eq!(session.mode(), Mode::Interactive);
        assert!(!session.has_rendered_still());
        assert_eq!(session.cursor(), None);
        assert!(!session.held().any());
    }

    #[test]
    fn budget_clamps_at_both_ends() {
        let mut session = session();

        for _ in 0..60 {
            session.increment_budget();
        }
        assert_eq!(session.iteration_budget(), 50);
        assert!(!session.increment_budget());

        for _ in 0..60 {
            session.decrement_budget();
        }
        assert_eq!(session.iteration_budget(), 0);
        assert!(!session.decrement_budget());
    }

    #[test]
    fn toggle_flips_mode_and_clears_still_flag() {
        let mut session = session();

        assert_eq!(session.toggle_mode(), Mode::StillRender);
        session.mark_still_rendered();
        assert!(session.has_rendered_still());

        assert_eq!(session.toggle_mode(), Mode::Interactive);
        assert!(!session.has_rendered_still());
    }

    #[test]
    fn toggle_keeps_the_rest_of_the_session() {
        let mut session = session();
        session.set_cursor(Complex::new(0.2, 0.3));
        session.increment_budget();
        session.set_direction(Direction::Right, true);
        session.pan_tick();

        session.toggle_mode();

        assert_eq!(session.cursor(), Some(Complex::new(0.2, 0.3)));
        assert_eq!(session.iteration_budget(), 6);
        assert!(session.held().right);
        assert_eq!(session.pan_origin(), Complex::new(0.01, 0.0));
    }

    #[test]
    fn pan_tick_runs_in_still_mode_too() {
        let mut session = session();
        session.toggle_mode();
        session.set_direction(Direction::Up, true);

        assert!(session.pan_tick());
        assert_eq!(session.pan_origin(), Complex::new(0.0, -0.01));
    }

    #[test]
    fn pan_is_relative_to_initial_origin() {
        let config = ExplorerConfig {
            initial_pan_origin: Complex::new(-0.5, 0.25),
            ..ExplorerConfig::default()
        };
        let mut session = SessionState::new(&config);
        session.set_direction(Direction::Left, true);

        session.pan_tick();
        session.pan_tick();

        assert_eq!(session.pan_origin(), Complex::new(-0.5 + -2.0 * 0.01, 0.25));
    }
}
