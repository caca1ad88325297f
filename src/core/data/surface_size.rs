use crate::core::data::screen_point::ScreenPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        }
    }

    /// `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= 0.0
            && point.x < f64::from(self.width)
            && point.y >= 0.0
            && point.y < f64::from(self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_odd_surface_is_fractional() {
        let size = SurfaceSize::new(801, 600);
        assert_eq!(size.center(), ScreenPoint::new(400.5, 300.0));
    }

    #[test]
    fn contains_is_half_open() {
        let size = SurfaceSize::new(100, 50);

        assert!(size.contains(ScreenPoint::new(0.0, 0.0)));
        assert!(size.contains(ScreenPoint::new(99.9, 49.9)));
        assert!(!size.contains(ScreenPoint::new(100.0, 10.0)));
        assert!(!size.contains(ScreenPoint::new(10.0, 50.0)));
        assert!(!size.contains(ScreenPoint::new(-0.1, 10.0)));
    }

    #[test]
    fn nan_points_are_never_inside() {
        let size = SurfaceSize::new(100, 100);
        assert!(!size.contains(ScreenPoint::new(f64::NAN, 10.0)));
    }

    #[test]
    fn zero_sized_surface_is_empty() {
        assert!(SurfaceSize::new(0, 10).is_empty());
        assert!(SurfaceSize::default().is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
    }
}
