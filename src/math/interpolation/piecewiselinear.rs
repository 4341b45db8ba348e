use crate::math::interpolation::interpolant::Interpolant;
use crate::math::interpolation::point2d::Point2D;

// ─────────────────────────────────────────────
// Segment
// ─────────────────────────────────────────────

/// One linear piece stored in Horner order `[slope, y]` relative to `lhs_x`.
struct Segment {
    coefs: [f64; 2],
    lhs_x: f64,
}

impl Segment {
    fn new(lhs_pt: &Point2D, rhs_pt: &Point2D) -> Segment {
        Segment {
            coefs: [Point2D::slope(lhs_pt, rhs_pt), lhs_pt.y()],
            lhs_x: lhs_pt.x(),
        }
    }

    fn value(&self, x: f64) -> f64 {
        // a knot hit exactly must not pick up a NaN slope from its neighbour
        if x == self.lhs_x {
            return self.coefs[1];
        }
        f64::mul_add(self.coefs[0], x - self.lhs_x, self.coefs[1])
    }
}

// ─────────────────────────────────────────────
// Extrapolation
// ─────────────────────────────────────────────

/// What `PiecewiseLinear::value` returns outside `[min_x, max_x]`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Extrapolation {
    /// NaN outside the knots. Resampled log curves use this so that
    /// depths a tool never logged stay null.
    Undefined,
    /// The nearest boundary value is held constant.
    Flat,
}

// ─────────────────────────────────────────────
// PiecewiseLinear
// ─────────────────────────────────────────────

pub struct PiecewiseLinear {
    first: Point2D,
    last: Point2D,
    segment_list: Vec<Segment>,
    extrapolation: Extrapolation,
}

impl PiecewiseLinear {
    /// Knots must have finite, strictly increasing x. The y values may be NaN,
    /// in which case every segment touching that knot evaluates to NaN.
    ///
    /// A single knot is accepted and behaves as a constant at that depth.
    pub fn new(points: Vec<Point2D>, extrapolation: Extrapolation) -> Option<PiecewiseLinear> {
        let first = *points.first()?;
        let last = *points.last()?;

        let increasing = points
            .windows(2)
            .all(|w| w[0].x() < w[1].x());
        if !increasing || points.iter().any(|p| !p.x().is_finite()) {
            return None;
        }

        let segment_list = points
            .windows(2)
            .map(|w| Segment::new(&w[0], &w[1]))
            .collect();

        Some(PiecewiseLinear {
            first,
            last,
            segment_list,
            extrapolation,
        })
    }

    pub fn from_slices(xs: &[f64], ys: &[f64], extrapolation: Extrapolation) -> Option<PiecewiseLinear> {
        if xs.len() != ys.len() {
            return None;
        }
        Self::new(Point2D::zip(xs, ys), extrapolation)
    }

    fn find_segment(&self, x: f64) -> usize {
        let i = self.segment_list.partition_point(|s| s.lhs_x <= x);
        i.saturating_sub(1).min(self.segment_list.len() - 1)
    }
}

impl Interpolant for PiecewiseLinear {
    fn value(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.first.x() || x > self.last.x() {
            return match self.extrapolation {
                Extrapolation::Undefined => f64::NAN,
                Extrapolation::Flat if x < self.first.x() => self.first.y(),
                Extrapolation::Flat => self.last.y(),
            };
        }
        if self.segment_list.is_empty() {
            return self.first.y();
        }
        // right end belongs to the last segment but is returned as the knot itself
        if x == self.last.x() {
            return self.last.y();
        }
        let i = self.find_segment(x);
        self.segment_list[i].value(x)
    }

    fn min_x(&self) -> f64 {
        self.first.x()
    }

    fn max_x(&self) -> f64 {
        self.last.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(extrapolation: Extrapolation) -> PiecewiseLinear {
        PiecewiseLinear::from_slices(&[0.0, 10.0, 20.0], &[0.0, 100.0, 50.0], extrapolation)
            .unwrap()
    }

    #[test]
    fn test_interpolates_inside_segments() {
        let curve = ramp(Extrapolation::Undefined);
        assert!((curve.value(5.0) - 50.0).abs() < 1e-12);
        assert!((curve.value(15.0) - 75.0).abs() < 1e-12);
        assert_eq!(curve.value(20.0), 50.0);
        assert_eq!(curve.value(0.0), 0.0);
    }

    #[test]
    fn test_undefined_outside_domain() {
        let curve = ramp(Extrapolation::Undefined);
        assert!(curve.value(-1.0).is_nan());
        assert!(curve.value(20.5).is_nan());
    }

    #[test]
    fn test_flat_holds_boundaries() {
        let curve = ramp(Extrapolation::Flat);
        assert_eq!(curve.value(-100.0), 0.0);
        assert_eq!(curve.value(1000.0), 50.0);
    }

    #[test]
    fn test_nan_knot_poisons_adjacent_segments_only() {
        let curve = PiecewiseLinear::from_slices(
            &[0.0, 1.0, 2.0, 3.0],
            &[1.0, f64::NAN, 3.0, 4.0],
            Extrapolation::Undefined,
        )
        .unwrap();
        assert!(curve.value(0.5).is_nan());
        assert!(curve.value(1.5).is_nan());
        assert!((curve.value(2.5) - 3.5).abs() < 1e-12);
        assert_eq!(curve.value(0.0), 1.0);
        assert_eq!(curve.value(2.0), 3.0);
    }

    #[test]
    fn test_rejects_unordered_knots() {
        assert!(PiecewiseLinear::from_slices(&[0.0, 2.0, 1.0], &[0.0; 3], Extrapolation::Flat).is_none());
        assert!(PiecewiseLinear::from_slices(&[0.0, 0.0], &[0.0; 2], Extrapolation::Flat).is_none());
        assert!(PiecewiseLinear::from_slices(&[], &[], Extrapolation::Flat).is_none());
    }

    #[test]
    fn test_single_knot_is_constant() {
        let flat = PiecewiseLinear::from_slices(&[5.0], &[2.0], Extrapolation::Flat).unwrap();
        assert_eq!(flat.value(0.0), 2.0);
        assert_eq!(flat.value(5.0), 2.0);
        let undefined = PiecewiseLinear::from_slices(&[5.0], &[2.0], Extrapolation::Undefined).unwrap();
        assert_eq!(undefined.value(5.0), 2.0);
        assert!(undefined.value(6.0).is_nan());
    }
}
