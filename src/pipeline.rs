use thiserror::Error;

use crate::depth::deviation::deviationintegrator::{
    DeviationError,
    DeviationResult,
    DeviationSurveyIntegrator
};
use crate::depth::resampler::DepthBasisResampler;
use crate::welldata::curveerror::CurveError;
use crate::welldata::deviationsurvey::DeviationSurvey;
use crate::welldata::well::Well;
use crate::welldata::wellframe::{
    FrameError,
    WellFrame
};

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("resampling failed: {0}")]
    Curve(#[from] CurveError),

    #[error("deviation integration failed: {0}")]
    Deviation(#[from] DeviationError),

    #[error("tabulating the well failed: {0}")]
    Frame(#[from] FrameError)
}

/// A well aligned on its MD axis, ready for layout.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedWell {
    well: Well,
    frame: WellFrame,
    deviation: DeviationResult
}

impl PreparedWell {
    pub fn well(&self) -> &Well {
        &self.well
    }

    pub fn frame(&self) -> &WellFrame {
        &self.frame
    }

    pub fn deviation(&self) -> &DeviationResult {
        &self.deviation
    }

    pub fn into_parts(self) -> (Well, WellFrame, DeviationResult) {
        (self.well, self.frame, self.deviation)
    }
}

/// Resample, integrate the survey (or assume a vertical hole) and tabulate.
pub fn prepare_well(well: Well,
                    survey: Option<&DeviationSurvey>,
                    step: Option<f64>) -> Result<PreparedWell, PipelineError> {
    prepare_well_with(&DeviationSurveyIntegrator::default(), well, survey, step)
}

pub fn prepare_well_with(integrator: &DeviationSurveyIntegrator,
                         well: Well,
                         survey: Option<&DeviationSurvey>,
                         step: Option<f64>) -> Result<PreparedWell, PipelineError> {
    let mut well = DepthBasisResampler::new(step).resample(well)?;
    let positive_step = step.filter(|s| *s > 0.0);
    let deviation = integrator.integrate(&mut well, survey, positive_step)?;
    let frame = well.frame()?;
    log::debug!(
        "prepared well '{}': {} rows, {} columns",
        well.name(), frame.len(), frame.columns().len()
    );
    Ok(PreparedWell { well, frame, deviation })
}
