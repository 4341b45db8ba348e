use crate::math::round::snap_depth;

/// Tolerance on `span / step` before taking the ceiling, so that spans which
/// are an exact multiple of the step do not gain a spurious extra sample.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Number of samples needed to cover `[start, stop]` at `step`: `⌈(stop − start)/step⌉ + 1`.
pub fn sample_count(start: f64, stop: f64, step: f64) -> usize {
    let steps = ((stop - start) / step - STEP_COUNT_TOLERANCE).ceil().max(0.0);
    steps as usize + 1
}

/// Regular depth axis `start, start + step, …` covering `[start, stop]`.
///
/// The last sample may overshoot `stop` by less than one step.
pub fn regular_axis(start: f64, stop: f64, step: f64) -> Vec<f64> {
    (0..sample_count(start, stop, step))
        .map(|i| snap_depth(start + step * i as f64))
        .collect()
}

/// Mean spacing of an ordered depth axis, or `None` for fewer than two samples.
pub fn mean_spacing(depths: &[f64]) -> Option<f64> {
    match (depths.first(), depths.last()) {
        (Some(first), Some(last)) if depths.len() > 1 => {
            Some((last - first) / (depths.len() - 1) as f64)
        },
        _ => None
    }
}

pub fn is_strictly_increasing(depths: &[f64]) -> bool {
    depths.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_axis_exact_multiple() {
        let axis = regular_axis(0.0, 10.0, 5.0);
        assert_eq!(axis, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_regular_axis_overshoots_partial_step() {
        let axis = regular_axis(0.0, 11.0, 5.0);
        assert_eq!(axis, vec![0.0, 5.0, 10.0, 15.0]);
        assert_eq!(sample_count(0.0, 11.0, 5.0), 4);
    }

    #[test]
    fn test_regular_axis_fractional_step_has_no_drift() {
        let axis = regular_axis(0.0, 1.0, 0.1);
        assert_eq!(axis.len(), 11);
        assert_eq!(axis[3], 0.3);
        assert_eq!(axis[10], 1.0);
        assert!(is_strictly_increasing(&axis));
    }

    #[test]
    fn test_mean_spacing() {
        assert_eq!(mean_spacing(&[100.0, 105.0, 110.0, 115.0]), Some(5.0));
        assert_eq!(mean_spacing(&[100.0]), None);
        assert_eq!(mean_spacing(&[]), None);
    }
}
