//! Renderer-facing output of the composer.
//!
//! Horizontal positions inside a track are normalized to `[0, 1]`; vertical
//! positions are raw depths on the shared axis, except for header records
//! which use paper coordinates (`0` bottom, `1` top of the whole figure).
//! Non-finite numbers serialize as JSON `null`, which renderers treat as gaps.

use serde::Serialize;

use crate::layout::curvestyle::{
    CurveStyle,
    LineStyle
};
use crate::layout::pointoverlay::PointStyle;

pub const STEP_LINE_SHAPE: &str = "hv";
pub const GHOST_OPACITY: f64 = 0.3;
pub const GRID_COLOR: &str = "rgba(128, 128, 128, 0.25)";
pub const GRID_WIDTH: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedGeometry {
    pub tracks: Vec<TrackGeometry>,
    pub depth_axis: DepthAxis,
    pub frame: FrameDecoration
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackGeometry {
    pub index: usize,
    pub x_axis: TrackAxis,
    pub traces: Vec<CurveTrace>,
    pub headers: Vec<HeaderSlot>,
    pub grid_lines: Vec<GridLine>,
    pub marker_groups: Vec<MarkerGroup>
}

/// Horizontal axis of one track. `domain` is the track's share of the
/// figure width; `range` is always `[0, 1]` and never zoomable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackAxis {
    pub domain: [f64; 2],
    pub range: [f64; 2],
    pub fixed_range: bool
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyKind {
    Primary,
    Lower,
    Upper
}

impl CopyKind {
    pub fn offset(&self) -> f64 {
        match self {
            CopyKind::Primary => 0.0,
            CopyKind::Lower => -1.0,
            CopyKind::Upper => 1.0
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            CopyKind::Primary => 1.0,
            CopyKind::Lower | CopyKind::Upper => GHOST_OPACITY
        }
    }
}

/// One drawn copy of a curve, as `[x, depth]` pairs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceCopy {
    pub kind: CopyKind,
    pub offset: f64,
    pub opacity: f64,
    pub points: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Vec<String>>
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurveTrace {
    pub curve: String,
    pub unit: String,
    pub style: CurveStyle,
    pub line_shape: String,
    pub copies: Vec<TraceCopy>
}

impl CurveTrace {
    pub fn copy(&self, kind: CopyKind) -> Option<&TraceCopy> {
        self.copies.iter().find(|c| c.kind == kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Left,
    Center,
    Right
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextAnnotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub color: String
}

/// Horizontal colored rule under a header label, spanning the track.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderRule {
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
    pub color: String,
    pub thickness: f64,
    pub line_style: LineStyle
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderSlot {
    pub curve: String,
    pub slot: usize,
    pub name: TextAnnotation,
    pub rule: HeaderRule,
    pub left_label: TextAnnotation,
    pub right_label: TextAnnotation
}

/// Full-height vertical reference line at normalized position `x`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub value: f64,
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: String,
    pub width: f64
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub depth: f64,
    pub value: f64,
    pub label: String
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerGroup {
    pub group: String,
    pub style: PointStyle,
    pub markers: Vec<Marker>
}

/// The single vertical axis shared by every track. `inverted` puts the
/// shallowest depth at the top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepthAxis {
    pub key: Option<String>,
    pub min: f64,
    pub max: f64,
    pub inverted: bool,
    pub shared: bool
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameDecoration {
    pub width: f64,
    pub height: f64,
    pub header_fraction: f64,
    pub track_boundaries: Vec<f64>
}
