//! Interactive controller for the orbit explorer.
//!
//! This module provides the application layer: it owns the session state,
//! applies input events to it and draws the current state on every render
//! tick.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s from whatever windowing layer drives it
//! - **Output**: the `Renderer` and `StatusDisplayPort` traits
//! - **Core**: complex arithmetic, coordinate mapping and escape-time
//!   iteration from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod render;
pub mod session;
pub mod status;
pub mod ticker;

pub use controller::InteractiveController;
pub use data::explorer_config::ExplorerConfig;
pub use errors::config::ConfigError;
pub use events::input::InputEvent;
pub use ports::{Renderer, StatusDisplayPort};
pub use session::{Mode, SessionState};
pub use status::{StatusText, describe};
pub use ticker::FixedRateTicker;
