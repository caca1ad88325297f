use thiserror::Error;
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::config::ConfigError;
use crate::input::gui::app::gui_app::GuiApp;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] OsError),

    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Opens the explorer window and runs it until closed.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Orbit Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let mut app = GuiApp::new(window, &event_loop, self.config)?;
        let mut failure: Option<GuiError> = None;
        info!("explorer window open");

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(e) = app.render(egui_output) {
                            error!(error = %e, "render failed");
                            failure = Some(e.into());
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(*size) {
                            error!(error = %e, "resize failed");
                            failure = Some(e);
                            elwt.exit();
                        }
                        window.request_redraw();
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        if let Err(e) = app.resize(window.inner_size()) {
                            error!(error = %e, "resize failed");
                            failure = Some(e);
                            elwt.exit();
                        }
                        window.request_redraw();
                    }
                    WindowEvent::Focused(false) => app.focus_lost(),
                    _ => {
                        if !egui_consumed {
                            app.handle_input(event);
                        }
                        if egui_repaint {
                            window.request_redraw();
                        }
                    }
                }
            }
            Event::AboutToWait => {
                let (drawn, next_tick) = app.tick(std::time::Instant::now());
                if drawn {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
            }
            _ => {}
        })?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
