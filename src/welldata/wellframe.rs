use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("column '{name}' has {found} rows, frame index has {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        found: usize
    },

    #[error("curve '{0}' is not sampled on the shared depth basis")]
    UnalignedBasis(String),

    #[error("frame index is not strictly increasing")]
    IndexNotIncreasing
}

/// One named numeric column of a frame. Nulls are stored as NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameColumn {
    name: String,
    unit: String,
    values: Vec<f64>
}

impl FrameColumn {
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn unit(&self) -> &String {
        &self.unit
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A depth-indexed table of named series, all sharing one index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellFrame {
    index: Vec<f64>,
    columns: Vec<FrameColumn>
}

impl WellFrame {
    pub fn new(index: Vec<f64>) -> Result<WellFrame, FrameError> {
        if !index.windows(2).all(|w| w[0] < w[1]) {
            return Err(FrameError::IndexNotIncreasing);
        }
        Ok(WellFrame { index, columns: Vec::new() })
    }

    /// Add or replace a column. `null_value` entries are stored as NaN.
    pub fn add_column(&mut self,
                      name: &str,
                      unit: &str,
                      values: &[f64],
                      null_value: f64) -> Result<(), FrameError> {
        if values.len() != self.index.len() {
            return Err(FrameError::ColumnLengthMismatch {
                name: name.to_owned(),
                expected: self.index.len(),
                found: values.len()
            });
        }
        let column = FrameColumn {
            name: name.to_owned(),
            unit: unit.to_owned(),
            values: values
                .iter()
                .map(|&v| if v == null_value { f64::NAN } else { v })
                .collect()
        };
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column)
        }
        Ok(())
    }

    pub fn with_column(mut self,
                       name: &str,
                       unit: &str,
                       values: &[f64],
                       null_value: f64) -> Result<WellFrame, FrameError> {
        self.add_column(name, unit, values, null_value)?;
        Ok(self)
    }

    pub fn index(&self) -> &[f64] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn columns(&self) -> &[FrameColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&FrameColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Depth values backing the display: the named column if a key is given,
    /// otherwise the frame index.
    pub fn depth_values(&self, key: Option<&str>) -> Option<&[f64]> {
        match key {
            Some(key) => self.column(key).map(|c| c.values()),
            None => Some(&self.index)
        }
    }

    /// NaN-skipping mean of a column.
    pub fn column_mean(&self, name: &str) -> Option<f64> {
        let column = self.column(name)?;
        let (sum, count) = column
            .values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        if count == 0 { None } else { Some(sum / count as f64) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_column_converts_nulls() {
        let frame = WellFrame::new(vec![0.0, 1.0, 2.0])
            .unwrap()
            .with_column("GR", "gAPI", &[10.0, -999.25, 30.0], -999.25)
            .unwrap();
        let values = frame.column("GR").unwrap().values();
        assert_eq!(values[0], 10.0);
        assert!(values[1].is_nan());
        assert_eq!(frame.column_mean("GR"), Some(20.0));
    }

    #[test]
    fn test_add_column_rejects_wrong_length() {
        let mut frame = WellFrame::new(vec![0.0, 1.0]).unwrap();
        let err = frame.add_column("GR", "gAPI", &[1.0], -999.25).unwrap_err();
        assert!(matches!(err, FrameError::ColumnLengthMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_depth_values_by_key_or_index() {
        let frame = WellFrame::new(vec![0.0, 1.0])
            .unwrap()
            .with_column("TVDM", "m", &[0.0, 0.9], -999.25)
            .unwrap();
        assert_eq!(frame.depth_values(None).unwrap(), &[0.0, 1.0]);
        assert_eq!(frame.depth_values(Some("TVDM")).unwrap(), &[0.0, 0.9]);
        assert!(frame.depth_values(Some("DEPT")).is_none());
    }
}
