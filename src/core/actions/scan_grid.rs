use rayon::prelude::*;

use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::fractals::quadratic::diverges;
use crate::core::util::coordinate_mapper::CoordinateMapper;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub point: ScreenPoint,
    pub diverges: bool,
}

/// Classifies a regular grid of surface pixels as parameters of the map.
///
/// Every `stride`-th pixel `p` is tested with
/// `diverges(start, mapper.to_plane(p), max_depth)`. Columns are processed in
/// parallel on rayon's pool; the samples come back column-major (x outer,
/// y inner) regardless of scheduling.
#[must_use]
pub fn scan_grid(
    mapper: &CoordinateMapper,
    stride: u32,
    start: Complex,
    max_depth: u32,
) -> Vec<GridSample> {
    let surface = mapper.surface();
    if stride == 0 || surface.is_empty() {
        return Vec::new();
    }

    let step = stride as usize;
    let columns: Vec<u32> = (0..surface.width).step_by(step).collect();

    let samples: Vec<Vec<GridSample>> = columns
        .into_par_iter()
        .map(|x| {
            (0..surface.height)
                .step_by(step)
                .map(|y| {
                    let point = ScreenPoint::new(f64::from(x), f64::from(y));
                    GridSample {
                        point,
                        diverges: diverges(start, mapper.to_plane(point), max_depth),
                    }
                })
                .collect()
        })
        .collect();

    samples.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface_size::SurfaceSize;

    fn mapper(width: u32, height: u32) -> CoordinateMapper {
        CoordinateMapper::new(200.0, SurfaceSize::new(width, height)).unwrap()
    }

    #[test]
    fn covers_every_stride_point_in_column_major_order() {
        let samples = scan_grid(&mapper(10, 7), 3, Complex::ZERO, 10);
        let points: Vec<(f64, f64)> = samples.iter().map(|s| (s.point.x, s.point.y)).collect();

        let mut expected = Vec::new();
        for x in [0.0, 3.0, 6.0, 9.0] {
            for y in [0.0, 3.0, 6.0] {
                expected.push((x, y));
            }
        }

        assert_eq!(points, expected);
    }

    #[test]
    fn unit_stride_visits_every_pixel() {
        let samples = scan_grid(&mapper(16, 9), 1, Complex::ZERO, 1);
        assert_eq!(samples.len(), 16 * 9);
    }

    #[test]
    fn zero_stride_or_empty_surface_yields_nothing() {
        assert!(scan_grid(&mapper(10, 10), 0, Complex::ZERO, 10).is_empty());
        assert!(scan_grid(&mapper(0, 10), 1, Complex::ZERO, 10).is_empty());
    }

    #[test]
    fn centre_pixel_is_in_set_and_far_corner_diverges() {
        // 800x600 at 200 px/unit: centre is c = 0, top-left is c = -2 - 1.5i
        let samples = scan_grid(&mapper(800, 600), 100, Complex::ZERO, 250);

        let centre = samples
            .iter()
            .find(|s| s.point == ScreenPoint::new(400.0, 300.0))
            .expect("centre is on the grid");
        let corner = samples
            .iter()
            .find(|s| s.point == ScreenPoint::new(0.0, 0.0))
            .expect("corner is on the grid");

        assert!(!centre.diverges);
        assert!(corner.diverges);
    }

    #[test]
    fn matches_sequential_classification() {
        let mapper = mapper(64, 48);
        let start = Complex::new(0.1, -0.05);
        let samples = scan_grid(&mapper, 4, start, 50);

        for sample in samples {
            assert_eq!(
                sample.diverges,
                diverges(start, mapper.to_plane(sample.point), 50)
            );
        }
    }
}
