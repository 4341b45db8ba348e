use serde::{
    Deserialize,
    Serialize
};

/// Ordered curve membership of one display column.
///
/// `anchor` names the curve whose range positions grid lines and point
/// overlays; without one, the first member present in the frame is used.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    curves: Vec<String>,
    #[serde(default)]
    anchor: Option<String>
}

impl Track {
    pub fn new<S: Into<String>>(curves: impl IntoIterator<Item = S>) -> Track {
        Track {
            curves: curves.into_iter().map(Into::into).collect(),
            anchor: None
        }
    }

    pub fn with_anchor(mut self, anchor: &str) -> Track {
        self.anchor = Some(anchor.to_owned());
        self
    }

    pub fn curves(&self) -> &[String] {
        &self.curves
    }

    pub fn anchor(&self) -> Option<&String> {
        self.anchor.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
