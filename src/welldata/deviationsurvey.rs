use std::fs::File;
use std::io::BufReader;

use serde::{
    Deserialize,
    Serialize
};

use crate::manager::managererror::ManagerError;

/// A survey cell as read from the source table: a number or raw text.
///
/// Text is coerced on use; anything that does not parse becomes NaN and
/// travels downstream as a null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurveyValue {
    Number(f64),
    Text(String)
}

impl SurveyValue {
    pub fn to_f64(&self) -> f64 {
        match self {
            SurveyValue::Number(value) => *value,
            SurveyValue::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN)
        }
    }
}

impl From<f64> for SurveyValue {
    fn from(value: f64) -> Self {
        SurveyValue::Number(value)
    }
}

impl From<&str> for SurveyValue {
    fn from(text: &str) -> Self {
        SurveyValue::Text(text.to_owned())
    }
}

/// One survey station: measured depth (m), inclination and azimuth (degrees).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "MD")]
    md: SurveyValue,
    #[serde(rename = "INC")]
    inc: SurveyValue,
    #[serde(rename = "AZIM")]
    azim: SurveyValue
}

impl SurveyRow {
    pub fn new(md: impl Into<SurveyValue>,
               inc: impl Into<SurveyValue>,
               azim: impl Into<SurveyValue>) -> SurveyRow {
        SurveyRow {
            md: md.into(),
            inc: inc.into(),
            azim: azim.into()
        }
    }

    pub fn md(&self) -> f64 {
        self.md.to_f64()
    }

    pub fn inc(&self) -> f64 {
        self.inc.to_f64()
    }

    pub fn azim(&self) -> f64 {
        self.azim.to_f64()
    }
}

/// Coerced survey columns, NaN where a cell was not numeric.
pub struct SurveyColumns {
    pub md: Vec<f64>,
    pub inc: Vec<f64>,
    pub azim: Vec<f64>
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviationSurvey {
    rows: Vec<SurveyRow>
}

impl DeviationSurvey {
    pub fn new(rows: Vec<SurveyRow>) -> DeviationSurvey {
        DeviationSurvey { rows }
    }

    pub fn from_stations(stations: &[(f64, f64, f64)]) -> DeviationSurvey {
        DeviationSurvey::new(
            stations
                .iter()
                .map(|&(md, inc, azim)| SurveyRow::new(md, inc, azim))
                .collect()
        )
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<DeviationSurvey, ManagerError> {
        ManagerError::from_json_or_json_parse_error(json_value)
    }

    /// Read a JSON array of `{ "MD": .., "INC": .., "AZIM": .. }` rows.
    pub fn from_reader(file_path: &str) -> Result<DeviationSurvey, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let survey = serde_json::from_reader(reader)?;
        Ok(survey)
    }

    pub fn columns(&self) -> SurveyColumns {
        SurveyColumns {
            md: self.rows.iter().map(SurveyRow::md).collect(),
            inc: self.rows.iter().map(SurveyRow::inc).collect(),
            azim: self.rows.iter().map(SurveyRow::azim).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cells_are_coerced() {
        let row = SurveyRow::new(" 150.5 ", 12.0, "n/a");
        assert_eq!(row.md(), 150.5);
        assert_eq!(row.inc(), 12.0);
        assert!(row.azim().is_nan());
    }

    #[test]
    fn test_survey_from_json_rows() {
        let json = serde_json::json!([
            { "MD": 0.0, "INC": 0.0, "AZIM": 0.0 },
            { "MD": "500", "INC": 3.5, "AZIM": 120.0 },
            { "MD": 1000.0, "INC": "bad", "AZIM": 125.0 }
        ]);
        let survey = DeviationSurvey::from_json_value(json).unwrap();
        let columns = survey.columns();
        assert_eq!(columns.md, vec![0.0, 500.0, 1000.0]);
        assert_eq!(columns.inc[1], 3.5);
        assert!(columns.inc[2].is_nan());
    }
}
