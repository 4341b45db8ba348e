use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrajectoryError {
    #[error("trajectory needs at least one survey station")]
    NoStations,

    #[error("station {index}: measured depth {md} does not increase on the previous station")]
    NonIncreasingDepth {
        index: usize,
        md: f64
    },

    #[error("station {index}: non-finite value (md {md}, inc {inc}, azim {azim})")]
    NonFiniteStation {
        index: usize,
        md: f64,
        inc: f64,
        azim: f64
    }
}

/// Survey station in metres and degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurveyStation {
    pub md: f64,
    pub inc: f64,
    pub azim: f64
}

impl SurveyStation {
    pub fn new(md: f64, inc: f64, azim: f64) -> SurveyStation {
        SurveyStation { md, inc, azim }
    }

    pub fn is_finite(&self) -> bool {
        self.md.is_finite() && self.inc.is_finite() && self.azim.is_finite()
    }
}

/// Wellbore position at one station.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub md: f64,
    pub tvd: f64,
    pub northing: f64,
    pub easting: f64,
    /// Dogleg angle to the previous station, degrees.
    pub dogleg: f64
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>
}

impl Trajectory {
    pub fn new(points: Vec<TrajectoryPoint>) -> Trajectory {
        Trajectory { points }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn md(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.md).collect()
    }

    pub fn tvd(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tvd).collect()
    }
}

/// Turns ordered survey stations into wellbore positions.
pub trait TrajectoryModel: Send + Sync {
    fn compute(&self, stations: &[SurveyStation]) -> Result<Trajectory, TrajectoryError>;

    /// Check the preconditions shared by every model: at least one station,
    /// finite values, strictly increasing MD.
    fn validate(&self, stations: &[SurveyStation]) -> Result<(), TrajectoryError> {
        if stations.is_empty() {
            return Err(TrajectoryError::NoStations);
        }
        for (index, station) in stations.iter().enumerate() {
            if !station.is_finite() {
                return Err(TrajectoryError::NonFiniteStation {
                    index,
                    md: station.md,
                    inc: station.inc,
                    azim: station.azim
                });
            }
            if index > 0 && station.md <= stations[index - 1].md {
                return Err(TrajectoryError::NonIncreasingDepth { index, md: station.md });
            }
        }
        Ok(())
    }
}
