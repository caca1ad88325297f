//! GUI input adapter for interactive orbit exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the status panel and labels.

mod app;
pub mod commands;

pub use commands::run_gui::{GuiError, RunGuiCommand};
