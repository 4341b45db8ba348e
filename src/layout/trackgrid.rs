use serde::{
    Deserialize,
    Serialize
};

/// Vertical reference lines of a track, in the anchor curve's units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackGrid {
    #[serde(default)]
    show: bool,
    #[serde(default)]
    values: Vec<f64>
}

impl TrackGrid {
    pub fn new(show: bool, values: Vec<f64>) -> TrackGrid {
        TrackGrid { show, values }
    }

    pub fn hidden() -> TrackGrid {
        TrackGrid::default()
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_drawn(&self) -> bool {
        self.show && !self.values.is_empty()
    }
}
