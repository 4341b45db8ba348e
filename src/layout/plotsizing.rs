use serde::{
    Deserialize,
    Serialize
};

/// Height the header offsets were tuned against.
pub const STANDARD_HEIGHT: f64 = 1000.0;

fn default_total_height() -> f64 {
    STANDARD_HEIGHT
}

fn default_header_height() -> f64 {
    150.0
}

fn default_track_width() -> f64 {
    200.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSizing {
    #[serde(default = "default_total_height")]
    total_height: f64,
    #[serde(default = "default_header_height")]
    header_height: f64,
    #[serde(default = "default_track_width")]
    track_width: f64
}

impl Default for PlotSizing {
    fn default() -> Self {
        PlotSizing::new(default_total_height(), default_header_height())
    }
}

impl PlotSizing {
    pub fn new(total_height: f64, header_height: f64) -> PlotSizing {
        PlotSizing {
            total_height,
            header_height,
            track_width: default_track_width()
        }
    }

    pub fn with_track_width(mut self, track_width: f64) -> PlotSizing {
        self.track_width = track_width;
        self
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Share of the total height taken by the header band.
    pub fn header_fraction(&self) -> f64 {
        self.header_height / self.total_height
    }

    pub fn is_valid(&self) -> bool {
        self.total_height.is_finite()
            && self.total_height > 0.0
            && self.header_height >= 0.0
            && self.header_height < self.total_height
            && self.track_width.is_finite()
            && self.track_width > 0.0
    }
}
