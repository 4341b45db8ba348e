use serde::{
    Deserialize,
    Serialize
};

fn default_left() -> f64 {
    0.0
}

fn default_right() -> f64 {
    100.0
}

/// Display bounds of a curve within its track. `right < left` reverses the axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveRange {
    #[serde(default = "default_left")]
    left: f64,
    #[serde(default = "default_right")]
    right: f64
}

impl Default for CurveRange {
    fn default() -> Self {
        CurveRange::new(default_left(), default_right())
    }
}

impl CurveRange {
    pub fn new(left: f64, right: f64) -> CurveRange {
        CurveRange { left, right }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}
