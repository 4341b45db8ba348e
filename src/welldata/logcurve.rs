use serde::{
    Deserialize,
    Serialize
};

use crate::depth::depthaxis::{
    is_strictly_increasing,
    regular_axis
};
use crate::math::interpolation::interpolant::Interpolant;
use crate::math::interpolation::piecewiselinear::{
    Extrapolation,
    PiecewiseLinear
};
use crate::welldata::curveerror::CurveError;

/// LAS convention for an absent reading.
pub const DEFAULT_NULL_VALUE: f64 = -999.25;

fn default_null_value() -> f64 {
    DEFAULT_NULL_VALUE
}

/// A named, depth-indexed log series.
///
/// `basis` is optional: curves that come without a depth sampling are carried
/// along untouched by every depth operation. A sample is null when it equals
/// `null_value` or is NaN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogCurve {
    name: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    basis: Option<Vec<f64>>,
    samples: Vec<f64>,
    #[serde(default = "default_null_value")]
    null_value: f64
}

impl LogCurve {
    pub fn new(name: &str,
               unit: &str,
               basis: Vec<f64>,
               samples: Vec<f64>) -> Result<LogCurve, CurveError> {
        if basis.len() != samples.len() {
            return Err(CurveError::LengthMismatch {
                name: name.to_owned(),
                basis: basis.len(),
                samples: samples.len()
            });
        }
        if !is_strictly_increasing(&basis) || basis.iter().any(|d| !d.is_finite()) {
            return Err(CurveError::BasisNotIncreasing(name.to_owned()));
        }
        Ok(LogCurve {
            name: name.to_owned(),
            unit: unit.to_owned(),
            basis: Some(basis),
            samples,
            null_value: DEFAULT_NULL_VALUE
        })
    }

    pub fn without_basis(name: &str, unit: &str, samples: Vec<f64>) -> LogCurve {
        LogCurve {
            name: name.to_owned(),
            unit: unit.to_owned(),
            basis: None,
            samples,
            null_value: DEFAULT_NULL_VALUE
        }
    }

    pub fn with_null_value(mut self, null_value: f64) -> LogCurve {
        self.null_value = null_value;
        self
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn unit(&self) -> &String {
        &self.unit
    }

    pub fn basis(&self) -> Option<&[f64]> {
        self.basis.as_deref()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn null_value(&self) -> f64 {
        self.null_value
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_null(&self, value: f64) -> bool {
        value.is_nan() || value == self.null_value
    }

    /// First and last depth of the basis.
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        let basis = self.basis.as_ref()?;
        Some((*basis.first()?, *basis.last()?))
    }

    /// Samples with every null replaced by NaN.
    pub fn values_or_nan(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|&v| if self.is_null(v) { f64::NAN } else { v })
            .collect()
    }

    fn interpolant(&self) -> Option<PiecewiseLinear> {
        let basis = self.basis.as_ref()?;
        PiecewiseLinear::from_slices(basis, &self.values_or_nan(), Extrapolation::Undefined)
    }

    /// Linearly interpolated value at `depth`, `None` when null or off-basis.
    pub fn value_at(&self, depth: f64) -> Option<f64> {
        let value = self.interpolant()?.value(depth);
        if value.is_nan() { None } else { Some(value) }
    }

    /// Re-sample onto the regular axis `start..=stop` at `step`.
    ///
    /// Depths outside the native basis, and intervals touching a null, become
    /// `null_value`. A curve without basis is returned as is.
    pub fn to_basis(&self, start: f64, stop: f64, step: f64) -> Result<LogCurve, CurveError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(CurveError::InvalidStep(step));
        }
        if !start.is_finite() || !stop.is_finite() || stop < start {
            return Err(CurveError::InvalidInterval { start, stop });
        }
        if self.basis.is_none() {
            return Ok(self.clone());
        }

        let new_basis = regular_axis(start, stop, step);
        let new_samples = match self.interpolant() {
            Some(interpolant) => interpolant
                .sample(&new_basis)
                .into_iter()
                .map(|v| if v.is_nan() { self.null_value } else { v })
                .collect(),
            None => vec![self.null_value; new_basis.len()]
        };

        Ok(LogCurve {
            name: self.name.clone(),
            unit: self.unit.clone(),
            basis: Some(new_basis),
            samples: new_samples,
            null_value: self.null_value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gamma_ray() -> LogCurve {
        LogCurve::new("GR", "gAPI", vec![10.0, 20.0, 30.0], vec![40.0, 60.0, DEFAULT_NULL_VALUE])
            .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_basis() {
        let err = LogCurve::new("GR", "gAPI", vec![10.0, 10.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, CurveError::BasisNotIncreasing("GR".to_owned()));

        let err = LogCurve::new("GR", "gAPI", vec![10.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CurveError::LengthMismatch { basis: 1, samples: 2, .. }));
    }

    #[test]
    fn test_value_at_respects_nulls_and_domain() {
        let curve = gamma_ray();
        assert_eq!(curve.value_at(15.0), Some(50.0));
        assert_eq!(curve.value_at(25.0), None);
        assert_eq!(curve.value_at(5.0), None);
    }

    #[test]
    fn test_to_basis_nulls_outside_domain() {
        let curve = gamma_ray().to_basis(0.0, 30.0, 5.0).unwrap();
        assert_eq!(curve.basis().unwrap(), &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        let samples = curve.samples();
        assert_eq!(samples[0], DEFAULT_NULL_VALUE);
        assert_eq!(samples[1], DEFAULT_NULL_VALUE);
        assert_eq!(samples[2], 40.0);
        assert_eq!(samples[3], 50.0);
        assert_eq!(samples[4], 60.0);
        assert_eq!(samples[5], DEFAULT_NULL_VALUE);
        assert_eq!(samples[6], DEFAULT_NULL_VALUE);
    }

    #[test]
    fn test_to_basis_keeps_custom_null_sentinel() {
        let curve = LogCurve::new("DT", "us/ft", vec![5.0, 10.0], vec![80.0, 90.0])
            .unwrap()
            .with_null_value(-9999.0);
        let resampled = curve.to_basis(0.0, 10.0, 5.0).unwrap();
        assert_eq!(resampled.samples(), &[-9999.0, 80.0, 90.0]);
        assert_eq!(resampled.null_value(), -9999.0);
    }

    #[test]
    fn test_to_basis_leaves_curve_without_basis() {
        let curve = LogCurve::without_basis("FLAG", "", vec![1.0, 0.0]);
        assert_eq!(curve.to_basis(0.0, 10.0, 1.0).unwrap(), curve);
    }

    #[test]
    fn test_to_basis_rejects_bad_step() {
        assert_eq!(gamma_ray().to_basis(0.0, 10.0, 0.0), Err(CurveError::InvalidStep(0.0)));
    }
}
