use crate::controllers::interactive::ports::renderer::Renderer;
use crate::core::data::colour::PaletteColour;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;
use crate::presenters::raster::clip::clip_segment;

pub const BACKGROUND: [u8; 3] = [255, 255, 255];
const BYTES_PER_PIXEL: usize = 3;

fn buffer_len(size: SurfaceSize) -> usize {
    size.width as usize * size.height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: ScreenPoint,
}

/// Software [`Renderer`] over an RGB byte buffer, row-major, top-left origin.
///
/// Shapes are rasterised without anti-aliasing. Text is not rasterised: labels
/// are kept for an overlay to draw.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    size: SurfaceSize,
    buffer: Vec<u8>,
    subpaths: Vec<Vec<ScreenPoint>>,
    labels: Vec<Label>,
}

impl RasterCanvas {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buffer: BACKGROUND.repeat(buffer_len(size) / BYTES_PER_PIXEL),
            subpaths: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Reallocates for a new surface size. Previous contents are lost.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size != self.size {
            *self = Self::new(size);
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let offset = self.offset(x, y);
        Some([
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
        ])
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    fn plot(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= i64::from(self.size.width) || y >= i64::from(self.size.height) {
            return;
        }
        let offset = self.offset(x as u32, y as u32);
        self.buffer[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgb);
    }

    /// Pixel index range covering `[low, high]`, clamped to `0..limit`.
    fn span(low: f64, high: f64, limit: u32) -> Option<(i64, i64)> {
        let first = low.floor().max(0.0);
        let last = high.ceil().min(f64::from(limit) - 1.0);
        if !first.is_finite() || !last.is_finite() || first > last {
            return None;
        }
        Some((first as i64, last as i64))
    }

    /// Visits pixels whose centre lies within the annulus `inner..=outer`
    /// around `center`.
    fn paint_annulus(&mut self, center: ScreenPoint, inner: f64, outer: f64, rgb: [u8; 3]) {
        if !center.x.is_finite() || !center.y.is_finite() || !outer.is_finite() || outer < 0.0 {
            return;
        }

        let Some((x0, x1)) = Self::span(center.x - outer, center.x + outer, self.size.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(center.y - outer, center.y + outer, self.size.height)
        else {
            return;
        };

        let inner_sq = if inner > 0.0 { inner * inner } else { 0.0 };
        let outer_sq = outer * outer;

        for y in y0..=y1 {
            let dy = y as f64 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                let distance_sq = dx * dx + dy * dy;
                if distance_sq >= inner_sq && distance_sq <= outer_sq {
                    self.plot(x, y, rgb);
                }
            }
        }
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, rgb: [u8; 3]) {
        let Some((from, to)) = clip_segment(
            from,
            to,
            f64::from(self.size.width),
            f64::from(self.size.height),
        ) else {
            return;
        };

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u64;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (from.x + t * dx).floor() as i64;
            let y = (from.y + t * dy).floor() as i64;
            self.plot(x, y, rgb);
        }
    }
}

impl Renderer for RasterCanvas {
    fn clear(&mut self) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&BACKGROUND);
        }
        self.subpaths.clear();
        self.labels.clear();
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour) {
        self.paint_annulus(center, 0.0, radius, colour.rgb());
    }

    fn stroke_circle(&mut self, center: ScreenPoint, radius: f64, colour: PaletteColour) {
        self.paint_annulus(center, radius - 0.5, radius + 0.5, colour.rgb());
    }

    fn move_to(&mut self, point: ScreenPoint) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: ScreenPoint) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            None => self.subpaths.push(vec![point]),
        }
    }

    fn stroke(&mut self) {
        let rgb = PaletteColour::Ink.rgb();
        for subpath in std::mem::take(&mut self.subpaths) {
            for pair in subpath.windows(2) {
                self.draw_line(pair[0], pair[1], rgb);
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint) {
        self.labels.push(Label {
            text: text.to_owned(),
            position,
        });
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }
}
