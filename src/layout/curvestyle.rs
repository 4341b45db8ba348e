use serde::{
    Deserialize,
    Serialize
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot
}

fn default_color() -> String {
    "#1f77b4".to_owned()
}

fn default_thickness() -> f64 {
    1.5
}

/// Trace styling. `logarithmic` is a display choice, not a property of the data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    #[serde(default = "default_color")]
    color: String,
    #[serde(default = "default_thickness")]
    thickness: f64,
    #[serde(default)]
    line_style: LineStyle,
    #[serde(default)]
    logarithmic: bool
}

impl Default for CurveStyle {
    fn default() -> Self {
        CurveStyle {
            color: default_color(),
            thickness: default_thickness(),
            line_style: LineStyle::Solid,
            logarithmic: false
        }
    }
}

impl CurveStyle {
    pub fn new(color: &str,
               thickness: f64,
               line_style: LineStyle,
               logarithmic: bool) -> CurveStyle {
        CurveStyle {
            color: color.to_owned(),
            thickness,
            line_style,
            logarithmic
        }
    }

    pub fn color(&self) -> &String {
        &self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn logarithmic(&self) -> bool {
        self.logarithmic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let style: CurveStyle = serde_json::from_value(serde_json::json!({ "logarithmic": true })).unwrap();
        assert_eq!(style.color(), "#1f77b4");
        assert_eq!(style.thickness(), 1.5);
        assert_eq!(style.line_style(), LineStyle::Solid);
        assert!(style.logarithmic());
    }

    #[test]
    fn test_line_style_names() {
        let style: LineStyle = serde_json::from_value(serde_json::json!("dashdot")).unwrap();
        assert_eq!(style, LineStyle::DashDot);
    }
}
