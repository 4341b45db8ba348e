use std::sync::Arc;

use thiserror::Error;

use crate::depth::depthaxis::mean_spacing;
use crate::depth::deviation::minimumcurvature::MinimumCurvature;
use crate::depth::deviation::trajectory::{
    SurveyStation,
    Trajectory,
    TrajectoryError,
    TrajectoryModel
};
use crate::depth::resampler::unify_curves;
use crate::math::interpolation::interpolant::Interpolant;
use crate::math::interpolation::piecewiselinear::{
    Extrapolation,
    PiecewiseLinear
};
use crate::math::round::snap_depth;
use crate::welldata::curveerror::CurveError;
use crate::welldata::deviationsurvey::DeviationSurvey;
use crate::welldata::logcurve::LogCurve;
use crate::welldata::well::Well;

pub const MD_CURVE: &str = "MD";
pub const TVD_CURVE: &str = "TVDM";
const DEPTH_UNIT: &str = "m";

#[derive(Debug, Error, PartialEq)]
pub enum DeviationError {
    #[error("well has no logged depths to integrate against")]
    EmptyDepthAxis,

    #[error("depth spacing {0} is not a positive finite number")]
    InvalidSpacing(f64),

    #[error("survey has no row with a measured depth")]
    EmptySurvey,

    #[error("survey measured depths decrease")]
    UnorderedSurvey,

    #[error("trajectory computation failed: {0}")]
    Trajectory(#[from] TrajectoryError),

    #[error("re-basing curves onto the MD axis failed: {0}")]
    Curve(#[from] CurveError)
}

/// Aligned MD/TVD curves and the trajectory they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviationResult {
    spacing: f64,
    md: LogCurve,
    tvd: LogCurve,
    trajectory: Trajectory,
    dropped_rows: usize
}

impl DeviationResult {
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn md(&self) -> &LogCurve {
        &self.md
    }

    pub fn tvd(&self) -> &LogCurve {
        &self.tvd
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Rows removed for a null or repeated MD before the trajectory step.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

/// Folds a directional survey (or a vertical-well assumption) into a
/// measured-depth log.
pub struct DeviationSurveyIntegrator {
    model: Arc<dyn TrajectoryModel>
}

impl Default for DeviationSurveyIntegrator {
    fn default() -> Self {
        DeviationSurveyIntegrator::new(Arc::new(MinimumCurvature::new()))
    }
}

impl DeviationSurveyIntegrator {
    pub fn new(model: Arc<dyn TrajectoryModel>) -> DeviationSurveyIntegrator {
        DeviationSurveyIntegrator { model }
    }

    /// The supplied step if any, otherwise the mean spacing of `depths`.
    pub fn resolve_spacing(depths: &[f64], step: Option<f64>) -> Result<f64, DeviationError> {
        let spacing = match step {
            Some(step) => step,
            None => mean_spacing(depths).ok_or(DeviationError::EmptyDepthAxis)?
        };
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(DeviationError::InvalidSpacing(spacing));
        }
        Ok(spacing)
    }

    /// Shallow MD samples above the first logged depth.
    ///
    /// `padlength = ⌊first / spacing⌋` slots; slot 0 is the surface (MD 0)
    /// and slot `k` holds `first − spacing·(padlength − k)`, so the pad runs
    /// 0, …, first − 2·spacing, first − spacing.
    pub fn pad_depths(first: f64, spacing: f64) -> Vec<f64> {
        let padlength = (first / spacing).floor();
        if !padlength.is_finite() || padlength < 1.0 {
            return Vec::new();
        }
        let padlength = padlength as usize;
        let mut pad = vec![0.0; padlength];
        for i in 1..padlength {
            pad[padlength - i] = snap_depth(first - spacing * i as f64);
        }
        pad
    }

    /// Pad followed by the logged depths.
    pub fn target_md(depths: &[f64], spacing: f64) -> Vec<f64> {
        let mut md = match depths.first() {
            Some(&first) => Self::pad_depths(first, spacing),
            None => Vec::new()
        };
        md.extend_from_slice(depths);
        md
    }

    /// Inclination and azimuth on `target`, boundary values held outside the
    /// survey's own MD range. Rows with a null MD cannot be placed and are
    /// skipped, a repeated MD keeps its first row, and null INC/AZIM
    /// propagate as NaN.
    fn interpolate_survey(survey: &DeviationSurvey,
                          target: &[f64]) -> Result<(Vec<f64>, Vec<f64>), DeviationError> {
        let columns = survey.columns();
        let mut md: Vec<f64> = Vec::with_capacity(columns.md.len());
        let mut inc: Vec<f64> = Vec::with_capacity(columns.md.len());
        let mut azim: Vec<f64> = Vec::with_capacity(columns.md.len());
        let mut repeated = 0;
        for i in (0..columns.md.len()).filter(|&i| !columns.md[i].is_nan()) {
            match md.last() {
                Some(&last) if columns.md[i] < last => return Err(DeviationError::UnorderedSurvey),
                Some(&last) if columns.md[i] == last => {
                    repeated += 1;
                    continue;
                }
                _ => {}
            }
            md.push(columns.md[i]);
            inc.push(columns.inc[i]);
            azim.push(columns.azim[i]);
        }
        if md.is_empty() {
            return Err(DeviationError::EmptySurvey);
        }
        if repeated > 0 {
            log::debug!("collapsed {} survey rows with a repeated MD", repeated);
        }

        let inc_curve = PiecewiseLinear::from_slices(&md, &inc, Extrapolation::Flat)
            .ok_or(DeviationError::UnorderedSurvey)?;
        let azim_curve = PiecewiseLinear::from_slices(&md, &azim, Extrapolation::Flat)
            .ok_or(DeviationError::UnorderedSurvey)?;
        Ok((inc_curve.sample(target), azim_curve.sample(target)))
    }

    /// Drop rows with any null, or an MD not above the last kept one.
    fn clean_stations(md: &[f64], inc: &[f64], azim: &[f64]) -> Vec<SurveyStation> {
        let mut stations: Vec<SurveyStation> = Vec::with_capacity(md.len());
        for i in 0..md.len() {
            let station = SurveyStation::new(md[i], inc[i], azim[i]);
            if !station.is_finite() {
                continue;
            }
            if stations.last().is_some_and(|last| last.md >= station.md) {
                continue;
            }
            stations.push(station);
        }
        stations
    }

    /// Integrate the survey against the well's depth index and re-base the
    /// well onto the resulting MD axis.
    ///
    /// `MD` and `TVDM` curves are registered on the well, the survey and
    /// trajectory are stored on it, and every curve is unified onto
    /// `first_md..=last_md` at the resolved spacing.
    pub fn integrate(&self,
                     well: &mut Well,
                     survey: Option<&DeviationSurvey>,
                     step: Option<f64>) -> Result<DeviationResult, DeviationError> {
        let depths = well.depth_index();
        if depths.is_empty() {
            return Err(DeviationError::EmptyDepthAxis);
        }
        let spacing = Self::resolve_spacing(&depths, step)?;
        let target = Self::target_md(&depths, spacing);

        let (inc, azim) = match survey {
            Some(survey) => Self::interpolate_survey(survey, &target)?,
            None => {
                log::debug!("no survey for well '{}': assuming a vertical hole", well.name());
                (vec![0.0; target.len()], vec![0.0; target.len()])
            }
        };

        let stations = Self::clean_stations(&target, &inc, &azim);
        let dropped_rows = target.len() - stations.len();
        if dropped_rows > 0 {
            log::warn!(
                "dropped {} of {} deviation rows with null or repeated MD in well '{}'",
                dropped_rows, target.len(), well.name()
            );
        }

        let trajectory = self.model.compute(&stations)?;
        let md_axis = trajectory.md();
        let md = LogCurve::new(MD_CURVE, DEPTH_UNIT, md_axis.clone(), md_axis.clone())?;
        let tvd = LogCurve::new(TVD_CURVE, DEPTH_UNIT, md_axis.clone(), trajectory.tvd())?;

        well.insert_curve(md.clone());
        well.insert_curve(tvd.clone());
        well.set_survey(survey.cloned());
        well.set_trajectory(Some(trajectory.clone()));

        // trajectory guarantees at least one station
        let start = md_axis[0];
        let stop = md_axis[md_axis.len() - 1];
        unify_curves(well.curves_mut(), start, stop, spacing)?;
        log::info!(
            "well '{}' re-based onto MD {}..={} at spacing {} ({} stations)",
            well.name(), start, stop, spacing, stations.len()
        );

        Ok(DeviationResult {
            spacing,
            md,
            tvd,
            trajectory,
            dropped_rows
        })
    }
}
