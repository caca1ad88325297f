pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};
