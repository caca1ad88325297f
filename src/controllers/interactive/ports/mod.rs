//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (drawing surface, status display).

pub mod renderer;
pub mod status_display;

pub use renderer::Renderer;
pub use status_display::StatusDisplayPort;
