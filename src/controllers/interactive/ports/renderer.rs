use crate::core::data::colour::PaletteColour;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;

/// Immediate-mode drawing surface the controller paints onto each tick.
///
/// Lines follow a path model: `move_to` starts a subpath, `line_to` extends
/// it, and `stroke` draws the accumulated path in [`PaletteColour::Ink`] and
/// begins a new, empty one.
pub trait Renderer {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour);
    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour);
    fn move_to(&mut self, point: ScreenPoint);
    fn line_to(&mut self, point: ScreenPoint);
    fn stroke(&mut self);
    fn draw_text(&mut self, text: &str, position: ScreenPoint);
    fn surface_size(&self) -> SurfaceSize;
}
