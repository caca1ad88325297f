pub mod gui_app;
pub mod key_input;
