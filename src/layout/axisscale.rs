use crate::layout::curverange::CurveRange;

/// Floor applied before taking log10 of a non-positive value.
pub const LOG_EPSILON: f64 = 1e-10;

fn to_log(v: f64) -> f64 {
    if v.is_nan() {
        return f64::NAN;
    }
    v.max(LOG_EPSILON).log10()
}

/// Maps raw curve values into the track's unit interval: `left → 0`,
/// `right → 1`, unclamped. Logarithmic scales work in log10 space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    left: f64,
    right: f64,
    logarithmic: bool
}

impl AxisScale {
    /// `None` when the bounds coincide (after the log transform, if any) or are
    /// not finite.
    pub fn new(range: CurveRange, logarithmic: bool) -> Option<AxisScale> {
        let (left, right) = if logarithmic {
            (to_log(range.left()), to_log(range.right()))
        } else {
            (range.left(), range.right())
        };
        if !left.is_finite() || !right.is_finite() || left == right {
            return None;
        }
        Some(AxisScale { left, right, logarithmic })
    }

    pub fn logarithmic(&self) -> bool {
        self.logarithmic
    }

    pub fn normalize(&self, v: f64) -> f64 {
        let v = if self.logarithmic { to_log(v) } else { v };
        (v - self.left) / (self.right - self.left)
    }

    /// Normalize a whole curve. Under a log scale every sample `<= 0` is first
    /// replaced by the smallest positive sample of the curve, or by
    /// `LOG_EPSILON` when there is none. NaN stays NaN.
    ///
    /// Returns the normalized values and the number of substituted samples.
    pub fn normalize_samples(&self, samples: &[f64]) -> (Vec<f64>, usize) {
        if !self.logarithmic {
            return (samples.iter().map(|&v| self.normalize(v)).collect(), 0);
        }

        let floor = samples
            .iter()
            .copied()
            .filter(|&v| v > 0.0)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
            .unwrap_or(LOG_EPSILON);

        let mut substituted = 0;
        let values = samples
            .iter()
            .map(|&v| {
                if v <= 0.0 {
                    substituted += 1;
                    self.normalize(floor)
                } else {
                    self.normalize(v)
                }
            })
            .collect();
        (values, substituted)
    }

    /// Bounds in raw units, for range labels.
    pub fn display_bounds(&self) -> (f64, f64) {
        if self.logarithmic {
            (10f64.powf(self.left), 10f64.powf(self.right))
        } else {
            (self.left, self.right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_linear_endpoints_and_midpoint() {
        for (l, r) in [(0.0, 150.0), (140.0, 40.0), (0.54, -0.06), (-3.0, 3.0)] {
            let scale = AxisScale::new(CurveRange::new(l, r), false).unwrap();
            assert!(scale.normalize(l).abs() < TOL);
            assert!((scale.normalize(r) - 1.0).abs() < TOL);
            assert!((scale.normalize(0.5 * (l + r)) - 0.5).abs() < TOL);
        }
    }

    #[test]
    fn test_values_are_not_clamped() {
        let scale = AxisScale::new(CurveRange::new(0.0, 100.0), false).unwrap();
        assert!((scale.normalize(150.0) - 1.5).abs() < TOL);
        assert!((scale.normalize(-50.0) + 0.5).abs() < TOL);
    }

    #[test]
    fn test_log_scale_round_trips_labels() {
        let scale = AxisScale::new(CurveRange::new(0.02, 200.0), true).unwrap();
        let (l, r) = scale.display_bounds();
        assert!((l - 0.02).abs() < 1e-12);
        assert!((r - 200.0).abs() < 1e-9);
        assert!(scale.normalize(0.02).abs() < TOL);
        assert!((scale.normalize(200.0) - 1.0).abs() < TOL);
        assert!((scale.normalize(2.0) - 0.5).abs() < TOL);
    }

    #[test]
    fn test_log_samples_use_min_positive_floor() {
        let scale = AxisScale::new(CurveRange::new(1.0, 100.0), true).unwrap();
        let (values, substituted) = scale.normalize_samples(&[10.0, -5.0, 0.0, 1.0, f64::NAN]);
        assert_eq!(substituted, 2);
        assert!((values[0] - 0.5).abs() < TOL);
        assert!(values[1].abs() < TOL);
        assert!(values[2].abs() < TOL);
        assert!(values[3].abs() < TOL);
        assert!(values[4].is_nan());
    }

    #[test]
    fn test_log_samples_without_positive_values_use_epsilon() {
        let scale = AxisScale::new(CurveRange::new(1e-10, 1.0), true).unwrap();
        let (values, substituted) = scale.normalize_samples(&[0.0, -1.0]);
        assert_eq!(substituted, 2);
        assert!(values.iter().all(|v| v.abs() < TOL));
    }

    #[test]
    fn test_degenerate_ranges_are_rejected() {
        assert!(AxisScale::new(CurveRange::new(5.0, 5.0), false).is_none());
        // both bounds collapse onto the epsilon floor
        assert!(AxisScale::new(CurveRange::new(0.0, -1.0), true).is_none());
        assert!(AxisScale::new(CurveRange::new(f64::NAN, 1.0), false).is_none());
    }
}
