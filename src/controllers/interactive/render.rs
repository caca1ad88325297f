//! Per-tick drawing for both modes. Pure functions of session, mapper and
//! config; the renderer is the only thing they touch.

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::ports::renderer::Renderer;
use crate::controllers::interactive::session::SessionState;
use crate::core::actions::scan_grid::scan_grid;
use crate::core::data::colour::PaletteColour;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::fractals::quadratic::{diverges, orbit};
use crate::core::util::coordinate_mapper::CoordinateMapper;

pub const CURSOR_LABEL: &str = "z";
pub const PARAMETER_LABEL: &str = "c";

/// Clears the surface and fills every still-grid point whose orbit stays
/// bounded. Returns the number of points filled.
pub fn draw_still_pass<R: Renderer + ?Sized>(
    renderer: &mut R,
    mapper: &CoordinateMapper,
    session: &SessionState,
    config: &ExplorerConfig,
) -> usize {
    renderer.clear();

    let samples = scan_grid(
        mapper,
        config.still_stride,
        session.pan_origin(),
        config.still_render_depth,
    );

    let mut filled = 0;
    for sample in samples.iter().filter(|sample| !sample.diverges) {
        renderer.fill_circle(sample.point, config.still_marker_size, PaletteColour::InSet);
        filled += 1;
    }

    filled
}

/// Clears the surface and, once a cursor is known, draws its orbit with the
/// fixed guides.
pub fn draw_interactive_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    mapper: &CoordinateMapper,
    session: &SessionState,
    config: &ExplorerConfig,
) {
    renderer.clear();

    let Some(cursor) = session.cursor() else {
        return;
    };
    let parameter = session.pan_origin();

    if config.show_preview_grid {
        draw_preview_grid(renderer, mapper, session, config);
    }

    let mut points = orbit(cursor, parameter, session.iteration_budget());
    points.push(parameter);
    let screen_points: Vec<ScreenPoint> = points.iter().map(|p| mapper.to_screen(*p)).collect();

    for pair in screen_points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if mapper.is_in_bounds(from) || mapper.is_in_bounds(to) {
            renderer.move_to(from);
            renderer.line_to(to);
            renderer.stroke();
        }
    }

    let colour = PaletteColour::for_divergence(diverges(
        cursor,
        parameter,
        config.interactive_diverge_test_depth,
    ));
    let radius = config.orbit_marker_radius;
    let parameter_screen = mapper.to_screen(parameter);

    draw_marker(renderer, parameter_screen, radius, colour);
    for point in screen_points.iter().rev() {
        draw_marker(renderer, *point, radius, colour);
    }

    renderer.draw_text(CURSOR_LABEL, mapper.to_screen(cursor));
    renderer.draw_text(PARAMETER_LABEL, parameter_screen);

    draw_guides(renderer, mapper, config);
}

fn draw_marker<R: Renderer + ?Sized>(
    renderer: &mut R,
    center: ScreenPoint,
    radius: f64,
    colour: PaletteColour,
) {
    renderer.fill_circle(center, radius, colour);
    renderer.stroke_circle(center, radius, PaletteColour::Border);
}

fn draw_preview_grid<R: Renderer + ?Sized>(
    renderer: &mut R,
    mapper: &CoordinateMapper,
    session: &SessionState,
    config: &ExplorerConfig,
) {
    let samples = scan_grid(
        mapper,
        config.grid_stride,
        session.pan_origin(),
        session.iteration_budget(),
    );

    for sample in samples {
        renderer.fill_circle(
            sample.point,
            config.marker_size,
            PaletteColour::for_divergence(sample.diverges),
        );
    }
}

/// Real and imaginary axes through the plane origin plus the unit circle.
fn draw_guides<R: Renderer + ?Sized>(
    renderer: &mut R,
    mapper: &CoordinateMapper,
    config: &ExplorerConfig,
) {
    let extent = config.guide_half_extent;
    let axes = [
        (Complex::new(extent, 0.0), Complex::new(-extent, 0.0)),
        (Complex::new(0.0, extent), Complex::new(0.0, -extent)),
    ];

    for (from, to) in axes {
        renderer.move_to(mapper.to_screen(from));
        renderer.line_to(mapper.to_screen(to));
        renderer.stroke();
    }

    renderer.stroke_circle(
        mapper.to_screen(Complex::ZERO),
        mapper.unit_scale(),
        PaletteColour::Border,
    );
}
