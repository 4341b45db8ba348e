use crate::depth::deviation::trajectory::Trajectory;
use crate::welldata::deviationsurvey::DeviationSurvey;
use crate::welldata::logcurve::LogCurve;
use crate::welldata::wellframe::{
    FrameError,
    WellFrame
};

/// Ownership aggregate of a well's curves, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Well {
    name: String,
    curves: Vec<LogCurve>,
    survey: Option<DeviationSurvey>,
    trajectory: Option<Trajectory>
}

impl Well {
    pub fn new(name: &str) -> Well {
        Well {
            name: name.to_owned(),
            curves: Vec::new(),
            survey: None,
            trajectory: None
        }
    }

    pub fn with_curve(mut self, curve: LogCurve) -> Well {
        self.insert_curve(curve);
        self
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    /// Insert a curve, replacing any curve of the same name in place.
    pub fn insert_curve(&mut self, curve: LogCurve) {
        match self.curves.iter_mut().find(|c| c.name() == curve.name()) {
            Some(existing) => *existing = curve,
            None => self.curves.push(curve)
        }
    }

    pub fn curve(&self, name: &str) -> Option<&LogCurve> {
        self.curves.iter().find(|c| c.name() == name)
    }

    pub fn curves(&self) -> &[LogCurve] {
        &self.curves
    }

    pub fn curves_mut(&mut self) -> &mut Vec<LogCurve> {
        &mut self.curves
    }

    pub fn curve_names(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.name().as_str()).collect()
    }

    pub fn survey(&self) -> Option<&DeviationSurvey> {
        self.survey.as_ref()
    }

    pub fn set_survey(&mut self, survey: Option<DeviationSurvey>) {
        self.survey = survey;
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    pub fn set_trajectory(&mut self, trajectory: Option<Trajectory>) {
        self.trajectory = trajectory;
    }

    /// Deepest basis end over every curve that has a basis.
    pub fn max_depth(&self) -> Option<f64> {
        self.curves
            .iter()
            .filter_map(|c| c.depth_range())
            .map(|(_, last)| last)
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))))
    }

    /// Union of every curve basis, sorted and de-duplicated. Equal to the
    /// shared basis once the well has been resampled.
    pub fn depth_index(&self) -> Vec<f64> {
        let mut depths: Vec<f64> = self.curves
            .iter()
            .filter_map(|c| c.basis())
            .flat_map(|b| b.iter().copied())
            .collect();
        depths.sort_by(f64::total_cmp);
        depths.dedup();
        depths
    }

    /// Tabulate the well on its depth index.
    ///
    /// Every curve with a basis must sit exactly on that index; curves without
    /// a basis are included when their length matches it and skipped otherwise.
    pub fn frame(&self) -> Result<WellFrame, FrameError> {
        let index = self.depth_index();
        let mut frame = WellFrame::new(index.clone())?;
        for curve in &self.curves {
            match curve.basis() {
                Some(basis) if basis != index.as_slice() => {
                    return Err(FrameError::UnalignedBasis(curve.name().to_owned()));
                }
                None if curve.len() != index.len() => {
                    log::warn!(
                        "curve '{}' of well '{}' has no depth basis and {} samples for {} depths: left out of the frame",
                        curve.name(), self.name, curve.len(), index.len()
                    );
                    continue;
                }
                _ => {}
            }
            frame.add_column(curve.name(), curve.unit(), curve.samples(), curve.null_value())?;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> Well {
        Well::new("A-1")
            .with_curve(LogCurve::new("GR", "gAPI", vec![0.0, 5.0, 10.0], vec![1.0, 2.0, 3.0]).unwrap())
            .with_curve(LogCurve::new("DT", "us/ft", vec![0.0, 5.0, 10.0], vec![90.0, 80.0, 70.0]).unwrap())
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut well = well();
        well.insert_curve(LogCurve::new("GR", "gAPI", vec![0.0], vec![9.0]).unwrap());
        assert_eq!(well.curve_names(), vec!["GR", "DT"]);
        assert_eq!(well.curve("GR").unwrap().samples(), &[9.0]);
    }

    #[test]
    fn test_frame_of_aligned_well() {
        let frame = well().frame().unwrap();
        assert_eq!(frame.index(), &[0.0, 5.0, 10.0]);
        assert_eq!(frame.column_names(), vec!["GR", "DT"]);
    }

    #[test]
    fn test_frame_skips_basisless_curve_of_other_length() {
        let well = well()
            .with_curve(LogCurve::without_basis("ZONE", "", vec![1.0]))
            .with_curve(LogCurve::without_basis("FLAG", "", vec![0.0, 1.0, 0.0]));
        let frame = well.frame().unwrap();
        assert_eq!(frame.column_names(), vec!["GR", "DT", "FLAG"]);
        assert!(!frame.contains("ZONE"));
    }

    #[test]
    fn test_frame_rejects_unaligned_curves() {
        let well = well()
            .with_curve(LogCurve::new("RT", "ohmm", vec![2.5, 7.5], vec![1.0, 2.0]).unwrap());
        assert_eq!(well.frame(), Err(FrameError::UnalignedBasis("GR".to_owned())));
        assert_eq!(well.max_depth(), Some(10.0));
    }
}
