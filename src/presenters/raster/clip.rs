use crate::core::data::screen_point::ScreenPoint;

/// Liang–Barsky clip of a segment against `[0, width] x [0, height]`.
///
/// Returns `None` when the segment misses the box or an endpoint is not
/// finite. Orbit points far outside the surface are common, so the segment
/// must be cut down before it is walked pixel by pixel.
#[must_use]
pub fn clip_segment(
    from: ScreenPoint,
    to: ScreenPoint,
    width: f64,
    height: f64,
) -> Option<(ScreenPoint, ScreenPoint)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|v| v.is_finite()) {
        return None;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-dx, from.x),
        (dx, width - from.x),
        (-dy, from.y),
        (dy, height - from.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    Some((
        ScreenPoint::new(from.x + t0 * dx, from.y + t0 * dy),
        ScreenPoint::new(from.x + t1 * dx, from.y + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::clip_segment;
    use crate::core::data::screen_point::ScreenPoint;

    #[test]
    fn inside_segment_is_unchanged() {
        let a = ScreenPoint::new(1.0, 2.0);
        let b = ScreenPoint::new(8.0, 9.0);

        assert_eq!(clip_segment(a, b, 10.0, 10.0), Some((a, b)));
    }

    #[test]
    fn crossing_segment_is_cut_at_the_edges() {
        let clipped = clip_segment(
            ScreenPoint::new(-10.0, 5.0),
            ScreenPoint::new(20.0, 5.0),
            10.0,
            10.0,
        );

        assert_eq!(
            clipped,
            Some((ScreenPoint::new(0.0, 5.0), ScreenPoint::new(10.0, 5.0)))
        );
    }

    #[test]
    fn far_away_endpoint_is_pulled_in() {
        let (from, to) = clip_segment(
            ScreenPoint::new(5.0, 5.0),
            ScreenPoint::new(1e200, 5.0),
            10.0,
            10.0,
        )
        .expect("segment starts inside");

        assert_eq!(from, ScreenPoint::new(5.0, 5.0));
        assert!((to.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn missing_segment_is_rejected() {
        assert_eq!(
            clip_segment(
                ScreenPoint::new(-5.0, -5.0),
                ScreenPoint::new(-1.0, 20.0),
                10.0,
                10.0
            ),
            None
        );
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        assert_eq!(
            clip_segment(
                ScreenPoint::new(5.0, 5.0),
                ScreenPoint::new(f64::INFINITY, 5.0),
                10.0,
                10.0
            ),
            None
        );
    }
}
