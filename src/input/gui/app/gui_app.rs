use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::status::StatusText;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::app::key_input::{input_event_for, release_all};
use crate::input::gui::commands::run_gui::GuiError;
use crate::presenters::pixels::{PixelsPresenter, StatusAdapter};
use crate::presenters::raster::{Label, RasterCanvas};

const LABEL_FONT_SIZE: f32 = 14.0;

fn surface_size(size: PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(size.width, size.height)
}

/// Winit wheel deltas are positive when scrolling up; the controller wants
/// the opposite sign.
fn wheel_delta_y(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(*y),
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

pub struct GuiApp {
    presenter: PixelsPresenter,
    canvas: RasterCanvas,
    controller: InteractiveController,
    status_adapter: Arc<StatusAdapter>,
    status: StatusText,
    tick_period: Duration,
    last_tick: Instant,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: ExplorerConfig,
    ) -> Result<Self, GuiError> {
        let size = surface_size(window.inner_size());
        let scale_factor = window.scale_factor();

        let presenter = PixelsPresenter::new(window)?;
        let status_adapter = Arc::new(StatusAdapter::new());
        let controller = InteractiveController::new(config, size, status_adapter.clone())?;
        let status = controller.status();

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            canvas: RasterCanvas::new(size),
            controller,
            status_adapter,
            status,
            tick_period: Duration::from_secs_f64(config.dt()),
            last_tick: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    /// Forwards the event to egui first. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Translates pointer, wheel and keyboard events into controller input.
    pub fn handle_input(&mut self, event: &WindowEvent) {
        let input = match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(InputEvent::PointerMoved(ScreenPoint::new(position.x, position.y)))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta_y: wheel_delta_y(delta),
            }),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key_code) => input_event_for(key_code, event.state, event.repeat),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        };

        if let Some(input) = input {
            self.controller.handle_input(input);
        }
    }

    pub fn focus_lost(&mut self) {
        for input in release_all() {
            self.controller.handle_input(input);
        }
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), GuiError> {
        let size = surface_size(size);
        debug!(width = size.width, height = size.height, "window resized");

        self.presenter.resize(size)?;
        self.canvas.resize(size);
        Ok(())
    }

    /// Runs the pan and render ticks owed since the last call. Returns whether
    /// a new frame was drawn, and when the next tick falls due.
    pub fn tick(&mut self, now: Instant) -> (bool, Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.controller.advance_pan(elapsed);
        let drawn = self.controller.advance_render(elapsed, &mut self.canvas) > 0;

        (drawn, now + self.tick_period)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        if let Some(status) = self.status_adapter.take() {
            self.status = status;
        }

        let raw_input = self.egui_state.take_egui_input(window);
        let status = &self.status;
        let labels = self.canvas.labels();
        let mut toggle_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Orbit Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(status.status.as_str());
                    ui.label(status.instructions.as_str());
                    ui.separator();
                    if ui.button(status.switch_label.as_str()).clicked() {
                        toggle_clicked = true;
                    }
                });

            paint_labels(ctx, labels);
        });

        if toggle_clicked {
            self.controller.toggle_mode();
        }

        output
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(&self.canvas, egui_output, &self.egui_ctx)
    }
}

/// Canvas labels are in physical pixels, egui paints in points.
fn paint_labels(ctx: &Context, labels: &[Label]) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("canvas_labels"),
    ));
    let pixels_per_point = ctx.pixels_per_point();

    for label in labels {
        let position = egui::pos2(
            (label.position.x / f64::from(pixels_per_point)) as f32,
            (label.position.y / f64::from(pixels_per_point)) as f32,
        );
        painter.text(
            position,
            egui::Align2::LEFT_BOTTOM,
            &label.text,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            egui::Color32::BLACK,
        );
    }
}
