pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    ConfigError, ExplorerConfig, FixedRateTicker, InputEvent, InteractiveController, Mode,
    Renderer, SessionState, StatusDisplayPort, StatusText, describe,
};
pub use crate::core::data::colour::PaletteColour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::screen_point::ScreenPoint;
pub use crate::core::data::surface_size::SurfaceSize;
pub use crate::core::fractals::quadratic::{diverges, orbit};
pub use crate::core::pan::Direction;
pub use crate::core::util::coordinate_mapper::{CoordinateMapper, CoordinateMapperError};
pub use presenters::raster::RasterCanvas;
pub use presenters::recording::{DrawCommand, DrawList};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
