use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize
};

fn default_point_color() -> String {
    "#ff7f0e".to_owned()
}

fn default_point_size() -> f64 {
    10.0
}

fn default_symbol() -> String {
    "circle".to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    #[serde(default = "default_point_color")]
    color: String,
    #[serde(default = "default_point_size")]
    size: f64,
    #[serde(default = "default_symbol")]
    symbol: String
}

impl Default for PointStyle {
    fn default() -> Self {
        PointStyle {
            color: default_point_color(),
            size: default_point_size(),
            symbol: default_symbol()
        }
    }
}

impl PointStyle {
    pub fn new(color: &str, size: f64, symbol: &str) -> PointStyle {
        PointStyle {
            color: color.to_owned(),
            size,
            symbol: symbol.to_owned()
        }
    }

    pub fn color(&self) -> &String {
        &self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn symbol(&self) -> &String {
        &self.symbol
    }
}

/// Sparse `(value, depth)` observations drawn as markers, e.g. core plugs or
/// pressure tests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointGroup {
    points: Vec<(f64, f64)>,
    #[serde(default)]
    style: PointStyle
}

impl PointGroup {
    pub fn new(points: Vec<(f64, f64)>) -> PointGroup {
        PointGroup { points, style: PointStyle::default() }
    }

    pub fn with_style(mut self, style: PointStyle) -> PointGroup {
        self.style = style;
        self
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }
}

/// `track index → group name → points`.
pub type PointOverlays = BTreeMap<usize, BTreeMap<String, PointGroup>>;
