//! Software rasteriser used as the GUI's framebuffer source.

pub mod canvas;
pub mod clip;

pub use canvas::{Label, RasterCanvas};
