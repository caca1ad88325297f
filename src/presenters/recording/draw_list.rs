use crate::controllers::interactive::ports::renderer::Renderer;
use crate::core::data::colour::PaletteColour;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: ScreenPoint,
        radius: f64,
        colour: PaletteColour,
    },
    StrokeCircle {
        center: ScreenPoint,
        radius: f64,
        colour: PaletteColour,
    },
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    Stroke,
    Text {
        text: String,
        position: ScreenPoint,
    },
}

/// Headless [`Renderer`] that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    surface: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            commands: Vec::new(),
        }
    }

    /// Simulates the surface being resized from outside.
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands recorded since the most recent `clear`.
    #[must_use]
    pub fn since_last_clear(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| *command == DrawCommand::Clear)
            .map_or(0, |index| index + 1);
        &self.commands[start..]
    }

    /// Line segments formed by consecutive `MoveTo`/`LineTo` pairs that were
    /// stroked.
    #[must_use]
    pub fn stroked_segments(&self) -> Vec<(ScreenPoint, ScreenPoint)> {
        let mut segments = Vec::new();
        let mut pending = Vec::new();
        let mut cursor: Option<ScreenPoint> = None;

        for command in &self.commands {
            match command {
                DrawCommand::MoveTo(point) => cursor = Some(*point),
                DrawCommand::LineTo(point) => {
                    if let Some(from) = cursor {
                        pending.push((from, *point));
                    }
                    cursor = Some(*point);
                }
                DrawCommand::Stroke => {
                    segments.append(&mut pending);
                    cursor = None;
                }
                DrawCommand::Clear => {
                    pending.clear();
                    cursor = None;
                }
                _ => {}
            }
        }

        segments
    }
}

impl Renderer for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            colour,
        });
    }

    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            colour,
        });
    }

    fn move_to(&mut self, point: ScreenPoint) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: ScreenPoint) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
        });
    }

    fn surface_size(&self) -> SurfaceSize {
        self.surface
    }
}
