use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize
};

use crate::layout::curverange::CurveRange;
use crate::layout::curvestyle::CurveStyle;
use crate::layout::plotsizing::PlotSizing;
use crate::layout::pointoverlay::{
    PointGroup,
    PointOverlays
};
use crate::layout::track::Track;
use crate::layout::trackgrid::TrackGrid;

/// Everything the composer needs besides the data, supplied fresh per call.
///
/// `ranges` and `grids` are indexed like `tracks`; a missing entry falls back
/// to `CurveRange::default()` / a hidden grid. Styles are keyed by curve name
/// and shared across tracks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    ranges: Vec<BTreeMap<String, CurveRange>>,
    #[serde(default)]
    styles: BTreeMap<String, CurveStyle>,
    #[serde(default)]
    grids: Vec<TrackGrid>,
    #[serde(default)]
    points: PointOverlays,
    #[serde(default)]
    sizing: PlotSizing,
    #[serde(default)]
    depth_key: Option<String>
}

impl LayoutConfig {
    pub fn new(tracks: Vec<Track>) -> LayoutConfig {
        LayoutConfig {
            tracks,
            ..LayoutConfig::default()
        }
    }

    pub fn with_range(mut self, track: usize, curve: &str, range: CurveRange) -> LayoutConfig {
        if self.ranges.len() <= track {
            self.ranges.resize(track + 1, BTreeMap::new());
        }
        self.ranges[track].insert(curve.to_owned(), range);
        self
    }

    pub fn with_style(mut self, curve: &str, style: CurveStyle) -> LayoutConfig {
        self.styles.insert(curve.to_owned(), style);
        self
    }

    pub fn with_grid(mut self, track: usize, grid: TrackGrid) -> LayoutConfig {
        if self.grids.len() <= track {
            self.grids.resize(track + 1, TrackGrid::hidden());
        }
        self.grids[track] = grid;
        self
    }

    pub fn with_points(mut self, track: usize, group: &str, points: PointGroup) -> LayoutConfig {
        self.points
            .entry(track)
            .or_default()
            .insert(group.to_owned(), points);
        self
    }

    pub fn with_sizing(mut self, sizing: PlotSizing) -> LayoutConfig {
        self.sizing = sizing;
        self
    }

    pub fn with_depth_key(mut self, depth_key: &str) -> LayoutConfig {
        self.depth_key = Some(depth_key.to_owned());
        self
    }

    /// Fill in styles for curves this layout does not style itself.
    pub fn with_base_styles(mut self, base: &BTreeMap<String, CurveStyle>) -> LayoutConfig {
        for (name, style) in base {
            self.styles.entry(name.clone()).or_insert_with(|| style.clone());
        }
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn range(&self, track: usize, curve: &str) -> Option<CurveRange> {
        self.ranges.get(track)?.get(curve).copied()
    }

    pub fn range_or_default(&self, track: usize, curve: &str) -> CurveRange {
        self.range(track, curve).unwrap_or_default()
    }

    pub fn style(&self, curve: &str) -> Option<&CurveStyle> {
        self.styles.get(curve)
    }

    pub fn style_or_default(&self, curve: &str) -> CurveStyle {
        self.style(curve).cloned().unwrap_or_default()
    }

    pub fn styles(&self) -> &BTreeMap<String, CurveStyle> {
        &self.styles
    }

    pub fn grid(&self, track: usize) -> Option<&TrackGrid> {
        self.grids.get(track)
    }

    pub fn points(&self) -> &PointOverlays {
        &self.points
    }

    pub fn sizing(&self) -> &PlotSizing {
        &self.sizing
    }

    pub fn depth_key(&self) -> Option<&str> {
        self.depth_key.as_deref()
    }

    /// Largest configured curve count over all tracks.
    pub fn max_curve_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|t| t.curves().len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_grow_per_track_tables() {
        let config = LayoutConfig::new(vec![Track::new(["GR"]), Track::new(["RT", "RXO"])])
            .with_range(1, "RT", CurveRange::new(0.2, 2000.0))
            .with_grid(1, TrackGrid::new(true, vec![2.0, 20.0]));
        assert_eq!(config.range(1, "RT"), Some(CurveRange::new(0.2, 2000.0)));
        assert_eq!(config.range(0, "GR"), None);
        assert_eq!(config.range_or_default(0, "GR"), CurveRange::new(0.0, 100.0));
        assert!(!config.grid(0).unwrap().show());
        assert!(config.grid(1).unwrap().is_drawn());
        assert_eq!(config.max_curve_count(), 2);
    }

    #[test]
    fn test_layout_styles_win_over_base() {
        let base = BTreeMap::from([
            ("GR".to_owned(), CurveStyle::new("#00ff00", 1.0, Default::default(), false)),
            ("RT".to_owned(), CurveStyle::new("#000000", 1.0, Default::default(), true)),
        ]);
        let config = LayoutConfig::new(vec![Track::new(["GR", "RT"])])
            .with_style("GR", CurveStyle::new("#276b02", 2.0, Default::default(), false))
            .with_base_styles(&base);
        assert_eq!(config.style("GR").unwrap().color(), "#276b02");
        assert!(config.style("RT").unwrap().logarithmic());
    }

    #[test]
    fn test_deserialize_with_point_overlays() {
        let json = serde_json::json!({
            "tracks": [{ "curves": ["GR"] }, { "curves": ["RHOB"], "anchor": "RHOB" }],
            "ranges": [{ "GR": { "left": 0, "right": 150 } }],
            "points": { "1": { "core": { "points": [[2.4, 1500.0]] } } },
            "sizing": { "total_height": 800 }
        });
        let config: LayoutConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.tracks()[1].anchor().unwrap(), "RHOB");
        assert_eq!(config.points()[&1]["core"].points(), &[(2.4, 1500.0)]);
        assert_eq!(config.sizing().total_height(), 800.0);
        assert_eq!(config.sizing().header_height(), 150.0);
    }
}
