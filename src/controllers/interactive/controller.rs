use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::config::ConfigError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::ports::renderer::Renderer;
use crate::controllers::interactive::ports::status_display::StatusDisplayPort;
use crate::controllers::interactive::render::{draw_interactive_frame, draw_still_pass};
use crate::controllers::interactive::session::{Mode, SessionState};
use crate::controllers::interactive::status::{StatusText, describe};
use crate::controllers::interactive::ticker::FixedRateTicker;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::pan::Direction;
use crate::core::util::coordinate_mapper::CoordinateMapper;

/// Owns the session and turns input plus two fixed-rate ticks into drawing.
///
/// Input handlers only mutate state. The render tick reads that state and
/// paints it onto a [`Renderer`]; the pan tick moves the parameter while arrow
/// keys are held. Both ticks can be driven directly (`render_tick`,
/// `pan_tick`) or from elapsed wall time (`advance_render`, `advance_pan`).
pub struct InteractiveController {
    config: ExplorerConfig,
    mapper: CoordinateMapper,
    session: SessionState,
    render_ticker: FixedRateTicker,
    pan_ticker: FixedRateTicker,
    status_port: Arc<dyn StatusDisplayPort>,
}

impl InteractiveController {
    pub fn new(
        config: ExplorerConfig,
        surface: SurfaceSize,
        status_port: Arc<dyn StatusDisplayPort>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mapper = CoordinateMapper::new(config.unit_scale, surface)?;

        let controller = Self {
            config,
            mapper,
            session: SessionState::new(&config),
            render_ticker: FixedRateTicker::new(config.dt(), config.max_ticks_per_advance),
            pan_ticker: FixedRateTicker::new(config.dt(), config.max_ticks_per_advance),
            status_port,
        };

        controller.publish_status();
        Ok(controller)
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved(position) => self.pointer_moved(position),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y),
            InputEvent::KeyDown(direction) => self.key_down(direction),
            InputEvent::KeyUp(direction) => self.key_up(direction),
            InputEvent::ToggleMode => self.toggle_mode(),
        }
    }

    pub fn pointer_moved(&mut self, position: ScreenPoint) {
        self.session.set_cursor(self.mapper.to_plane(position));
    }

    /// Scrolling up (negative delta) adds an iteration, scrolling down removes
    /// one. A zero or NaN delta is ignored.
    pub fn wheel(&mut self, delta_y: f64) {
        let changed = if delta_y < 0.0 {
            self.session.increment_budget()
        } else if delta_y > 0.0 {
            self.session.decrement_budget()
        } else {
            return;
        };

        if changed {
            debug!(budget = self.session.iteration_budget(), "iteration budget changed");
        }
        self.publish_status();
    }

    pub fn toggle_mode(&mut self) {
        let mode = self.session.toggle_mode();
        debug!(?mode, "mode switched");
        self.publish_status();
    }

    pub fn key_down(&mut self, direction: Direction) {
        self.session.set_direction(direction, true);
    }

    pub fn key_up(&mut self, direction: Direction) {
        self.session.set_direction(direction, false);
    }

    /// Re-centres the plane on a resized surface.
    ///
    /// A finished still render is discarded because the surface it was drawn
    /// on no longer exists.
    pub fn resize(&mut self, surface: SurfaceSize) {
        if surface == self.mapper.surface() {
            return;
        }

        debug!(width = surface.width, height = surface.height, "surface resized");
        self.mapper.recompute_origin(surface);
        self.session.invalidate_still();
    }

    /// One render tick.
    pub fn render_tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.resize(renderer.surface_size());

        match self.session.mode() {
            Mode::StillRender => {
                if self.session.has_rendered_still() {
                    return;
                }
                let filled = draw_still_pass(renderer, &self.mapper, &self.session, &self.config);
                self.session.mark_still_rendered();
                debug!(filled, "still render complete");
            }
            Mode::Interactive => {
                draw_interactive_frame(renderer, &self.mapper, &self.session, &self.config);
                trace!(cursor = ?self.session.cursor(), "interactive frame");
            }
        }
    }

    /// One pan tick. Returns whether the parameter moved.
    pub fn pan_tick(&mut self) -> bool {
        let moved = self.session.pan_tick();
        if moved {
            trace!(origin = ?self.session.pan_origin(), "panned");
        }
        moved
    }

    /// Runs the render tick if at least one period elapsed. Drawing is a
    /// function of current state, so owed ticks collapse into one frame.
    /// Returns the number of ticks that fell due.
    pub fn advance_render<R: Renderer + ?Sized>(
        &mut self,
        elapsed: Duration,
        renderer: &mut R,
    ) -> u32 {
        let ticks = self.render_ticker.advance(elapsed);
        if ticks > 0 {
            self.render_tick(renderer);
        }
        ticks
    }

    /// Runs every pan tick that fell due within `elapsed`.
    pub fn advance_pan(&mut self, elapsed: Duration) -> u32 {
        let ticks = self.pan_ticker.advance(elapsed);
        for _ in 0..ticks {
            self.pan_tick();
        }
        ticks
    }

    #[must_use]
    pub fn status(&self) -> StatusText {
        describe(&self.session)
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    fn publish_status(&self) {
        self.status_port.show(&self.status());
    }
}
