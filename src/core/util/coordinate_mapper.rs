use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::surface_size::SurfaceSize;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateMapperError {
    #[error("unit scale must be a positive finite number of pixels, got {0}")]
    InvalidUnitScale(f64),
}

/// Affine transform between surface pixels and plane coordinates.
///
/// The plane origin sits at the surface centre and one plane unit spans
/// `unit_scale` pixels on both axes. Both axes map with the same sign, so the
/// imaginary axis grows towards the bottom of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    origin_screen: ScreenPoint,
    unit_scale: f64,
    surface: SurfaceSize,
}

impl CoordinateMapper {
    pub fn new(unit_scale: f64, surface: SurfaceSize) -> Result<Self, CoordinateMapperError> {
        if !unit_scale.is_finite() || unit_scale <= 0.0 {
            return Err(CoordinateMapperError::InvalidUnitScale(unit_scale));
        }

        Ok(Self {
            origin_screen: surface.center(),
            unit_scale,
            surface,
        })
    }

    #[must_use]
    pub fn to_screen(&self, point: Complex) -> ScreenPoint {
        ScreenPoint {
            x: point.real * self.unit_scale + self.origin_screen.x,
            y: point.imag * self.unit_scale + self.origin_screen.y,
        }
    }

    #[must_use]
    pub fn to_plane(&self, point: ScreenPoint) -> Complex {
        Complex {
            real: (point.x - self.origin_screen.x) / self.unit_scale,
            imag: (point.y - self.origin_screen.y) / self.unit_scale,
        }
    }

    /// Re-centres the plane origin on a resized surface. Idempotent.
    pub fn recompute_origin(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.origin_screen = surface.center();
    }

    #[must_use]
    pub fn is_in_bounds(&self, point: ScreenPoint) -> bool {
        self.surface.contains(point)
    }

    #[must_use]
    pub fn origin_screen(&self) -> ScreenPoint {
        self.origin_screen
    }

    #[must_use]
    pub fn unit_scale(&self) -> f64 {
        self.unit_scale
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }
}
