#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::welldata::curveerror::CurveError;
use crate::welldata::logcurve::LogCurve;
use crate::welldata::well::Well;

/// Brings every curve of a well onto one regular depth axis.
///
/// A missing or non-positive step is an explicit bypass: the well is handed
/// back untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthBasisResampler {
    step: Option<f64>
}

impl DepthBasisResampler {
    pub fn new(step: Option<f64>) -> DepthBasisResampler {
        DepthBasisResampler { step }
    }

    fn active_step(&self) -> Result<Option<f64>, CurveError> {
        match self.step {
            Some(step) if step.is_nan() || step.is_infinite() => Err(CurveError::InvalidStep(step)),
            Some(step) if step > 0.0 => Ok(Some(step)),
            _ => Ok(None)
        }
    }

    /// Resample onto `0..=max_depth` where `max_depth` is the deepest basis
    /// end over all curves.
    pub fn resample(&self, mut well: Well) -> Result<Well, CurveError> {
        let Some(step) = self.active_step()? else {
            log::debug!("resample of well '{}' bypassed: no positive step", well.name());
            return Ok(well);
        };
        let Some(max_depth) = well.max_depth() else {
            log::debug!("resample of well '{}' bypassed: no curve carries a basis", well.name());
            return Ok(well);
        };

        log::debug!(
            "resampling {} curves of well '{}' onto 0..={} at step {}",
            well.curves().len(), well.name(), max_depth, step
        );
        unify_curves(well.curves_mut(), 0.0, max_depth, step)?;
        Ok(well)
    }
}

/// Resample every curve that has a basis onto `start..=stop` at `step`, in place.
pub fn unify_curves(curves: &mut Vec<LogCurve>,
                    start: f64,
                    stop: f64,
                    step: f64) -> Result<(), CurveError> {
    #[cfg(feature = "parallel")]
    let resampled: Result<Vec<LogCurve>, CurveError> = curves
        .par_iter()
        .map(|curve| curve.to_basis(start, stop, step))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let resampled: Result<Vec<LogCurve>, CurveError> = curves
        .iter()
        .map(|curve| curve.to_basis(start, stop, step))
        .collect();

    *curves = resampled?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::welldata::logcurve::DEFAULT_NULL_VALUE;

    fn mixed_well() -> Well {
        Well::new("B-2")
            .with_curve(LogCurve::new("GR", "gAPI", vec![2.0, 4.0, 6.0], vec![10.0, 20.0, 30.0]).unwrap())
            .with_curve(LogCurve::new("DT", "us/ft", vec![5.0, 11.0], vec![100.0, 70.0]).unwrap())
            .with_curve(LogCurve::without_basis("ZONE", "", vec![1.0]))
    }

    #[test]
    fn test_bypass_on_missing_or_non_positive_step() {
        for step in [None, Some(0.0), Some(-2.0)] {
            let well = mixed_well();
            let out = DepthBasisResampler::new(step).resample(well.clone()).unwrap();
            assert_eq!(out, well);
        }
    }

    #[test]
    fn test_rejects_nan_step() {
        let err = DepthBasisResampler::new(Some(f64::NAN)).resample(mixed_well()).unwrap_err();
        assert!(matches!(err, CurveError::InvalidStep(_)));
    }

    #[test]
    fn test_all_curves_share_axis_from_zero() {
        let well = DepthBasisResampler::new(Some(2.0)).resample(mixed_well()).unwrap();
        let expected = vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        assert_eq!(well.curve("GR").unwrap().basis().unwrap(), expected.as_slice());
        assert_eq!(well.curve("DT").unwrap().basis().unwrap(), expected.as_slice());
        assert!(well.curve("ZONE").unwrap().basis().is_none());

        let gr = well.curve("GR").unwrap().samples();
        assert_eq!(gr, &[DEFAULT_NULL_VALUE, 10.0, 20.0, 30.0, DEFAULT_NULL_VALUE, DEFAULT_NULL_VALUE, DEFAULT_NULL_VALUE]);
        let dt = well.curve("DT").unwrap().samples();
        assert_eq!(dt[2], DEFAULT_NULL_VALUE);
        assert!((dt[3] - 95.0).abs() < 1e-12);
        assert!((dt[5] - 75.0).abs() < 1e-12);
        assert_eq!(dt[6], DEFAULT_NULL_VALUE);
    }

    #[test]
    fn test_resample_is_deterministic() {
        let resampler = DepthBasisResampler::new(Some(0.5));
        let a = resampler.resample(mixed_well()).unwrap();
        let b = resampler.resample(mixed_well()).unwrap();
        assert_eq!(a, b);
    }
}
