use nalgebra::Vector3;

use crate::depth::deviation::trajectory::{
    SurveyStation,
    Trajectory,
    TrajectoryError,
    TrajectoryModel,
    TrajectoryPoint
};

// ─────────────────────────────────────────────────────────────────────────────
// Minimum curvature
// ─────────────────────────────────────────────────────────────────────────────
//
// Each course between two stations is taken as a circular arc. With unit
// tangents t1, t2 (north, east, down) and dogleg β = ∠(t1, t2):
//
//   RF = 2/β · tan(β/2)          (RF → 1 as β → 0)
//   Δp = ΔMD/2 · (t1 + t2) · RF
//
// The first station is tied in straight below the origin: TVD = MD,
// northing = easting = 0.

/// Doglegs below this angle (radians) use RF = 1.
const STRAIGHT_COURSE_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumCurvature;

impl MinimumCurvature {
    pub fn new() -> MinimumCurvature {
        MinimumCurvature
    }

    fn tangent(station: &SurveyStation) -> Vector3<f64> {
        let inc = station.inc.to_radians();
        let azim = station.azim.to_radians();
        Vector3::new(inc.sin() * azim.cos(), inc.sin() * azim.sin(), inc.cos())
    }

    fn ratio_factor(dogleg: f64) -> f64 {
        if dogleg < STRAIGHT_COURSE_EPSILON {
            1.0
        } else {
            2.0 / dogleg * (dogleg / 2.0).tan()
        }
    }
}

impl TrajectoryModel for MinimumCurvature {
    fn compute(&self, stations: &[SurveyStation]) -> Result<Trajectory, TrajectoryError> {
        self.validate(stations)?;

        let first = &stations[0];
        let mut position = Vector3::new(0.0, 0.0, first.md);
        let mut points = Vec::with_capacity(stations.len());
        points.push(TrajectoryPoint {
            md: first.md,
            tvd: position.z,
            northing: position.x,
            easting: position.y,
            dogleg: 0.0
        });

        for pair in stations.windows(2) {
            let t1 = Self::tangent(&pair[0]);
            let t2 = Self::tangent(&pair[1]);
            let dogleg = t1.angle(&t2);
            let course = pair[1].md - pair[0].md;
            position += (t1 + t2) * (course / 2.0 * Self::ratio_factor(dogleg));
            points.push(TrajectoryPoint {
                md: pair[1].md,
                tvd: position.z,
                northing: position.x,
                easting: position.y,
                dogleg: dogleg.to_degrees()
            });
        }

        Ok(Trajectory::new(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_well_tvd_equals_md() {
        let stations: Vec<SurveyStation> = [0.0, 5.0, 10.0]
            .iter()
            .map(|&md| SurveyStation::new(md, 0.0, 0.0))
            .collect();
        let trajectory = MinimumCurvature::new().compute(&stations).unwrap();
        assert_eq!(trajectory.tvd(), vec![0.0, 5.0, 10.0]);
        assert!(trajectory.points().iter().all(|p| p.northing == 0.0 && p.easting == 0.0));
    }

    #[test]
    fn test_horizontal_course_adds_no_depth() {
        let stations = [
            SurveyStation::new(1000.0, 90.0, 90.0),
            SurveyStation::new(1100.0, 90.0, 90.0),
        ];
        let trajectory = MinimumCurvature::new().compute(&stations).unwrap();
        let last = trajectory.points()[1];
        assert!((last.tvd - 1000.0).abs() < 1e-9);
        assert!((last.easting - 100.0).abs() < 1e-9);
        assert!(last.northing.abs() < 1e-9);
    }

    #[test]
    fn test_build_section_matches_circular_arc() {
        // 0° → 90° over a quarter circle of radius R: ΔTVD = ΔN = R
        let radius = 100.0;
        let arc = std::f64::consts::FRAC_PI_2 * radius;
        let stations = [
            SurveyStation::new(0.0, 0.0, 0.0),
            SurveyStation::new(arc, 90.0, 0.0),
        ];
        let trajectory = MinimumCurvature::new().compute(&stations).unwrap();
        let end = trajectory.points()[1];
        assert!((end.tvd - radius).abs() < 1e-9);
        assert!((end.northing - radius).abs() < 1e-9);
        assert!((end.dogleg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_increasing_md() {
        let stations = [
            SurveyStation::new(10.0, 0.0, 0.0),
            SurveyStation::new(10.0, 1.0, 0.0),
        ];
        let err = MinimumCurvature::new().compute(&stations).unwrap_err();
        assert_eq!(err, TrajectoryError::NonIncreasingDepth { index: 1, md: 10.0 });
    }

    #[test]
    fn test_rejects_empty_survey() {
        assert_eq!(MinimumCurvature::new().compute(&[]), Err(TrajectoryError::NoStations));
    }
}
