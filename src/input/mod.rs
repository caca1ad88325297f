//! Input adapters for the orbit explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into controller input events.

#[cfg(feature = "gui")]
pub mod gui;
