use crate::layout::axisscale::AxisScale;
use crate::layout::curvestyle::CurveStyle;
use crate::layout::geometry::{
    CopyKind,
    CurveTrace,
    DepthAxis,
    FrameDecoration,
    GridLine,
    HeaderRule,
    HeaderSlot,
    Marker,
    MarkerGroup,
    NormalizedGeometry,
    TextAnchor,
    TextAnnotation,
    TraceCopy,
    TrackAxis,
    TrackGeometry,
    GRID_COLOR,
    GRID_WIDTH,
    STEP_LINE_SHAPE
};
use crate::layout::labelformat::{
    format_general,
    truncate_name
};
use crate::layout::layoutconfig::LayoutConfig;
use crate::layout::layouterror::LayoutError;
use crate::layout::plotsizing::STANDARD_HEIGHT;
use crate::layout::track::Track;
use crate::welldata::wellframe::{
    FrameColumn,
    WellFrame
};

const HEADER_NAME_CHARS: usize = 5;
const NAME_LIFT: f64 = 0.02;
const SIGNIFICANT_DIGITS: usize = 4;

/// Per-call header placement shared by every track.
struct HeaderBand {
    slot_height: f64,
    name_lift: f64
}

impl HeaderBand {
    fn rule_y(&self, slot: usize) -> f64 {
        1.0 - (slot + 1) as f64 * self.slot_height
    }
}

/// Turns a frame plus a `LayoutConfig` into `NormalizedGeometry`.
///
/// Stateless: the same frame and configuration always produce the same
/// geometry, so it is safe to call on every configuration change.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackLayoutComposer;

impl TrackLayoutComposer {
    pub fn new() -> TrackLayoutComposer {
        TrackLayoutComposer
    }

    pub fn compose(&self,
                   frame: &WellFrame,
                   config: &LayoutConfig) -> Result<NormalizedGeometry, LayoutError> {
        let sizing = config.sizing();
        if !sizing.is_valid() {
            return Err(LayoutError::InvalidSizing);
        }
        let depths = frame
            .depth_values(config.depth_key())
            .ok_or_else(|| LayoutError::MissingDepthKey(config.depth_key().unwrap_or_default().to_owned()))?;
        if let Some(&track) = config.points().keys().find(|&&t| t >= config.tracks().len()) {
            return Err(LayoutError::UnknownTrack(track));
        }

        let band = HeaderBand {
            slot_height: sizing.header_fraction() / config.max_curve_count().max(1) as f64,
            name_lift: NAME_LIFT * STANDARD_HEIGHT / sizing.total_height()
        };
        let depth_axis = self.depth_axis(depths, config.depth_key());
        let num_tracks = config.tracks().len();

        let mut tracks = Vec::with_capacity(num_tracks);
        for (index, track) in config.tracks().iter().enumerate() {
            tracks.push(self.compose_track(index, track, frame, depths, &depth_axis, &band, config)?);
        }

        log::debug!(
            "composed {} tracks with {} traces over depth {}..{}",
            num_tracks,
            tracks.iter().map(|t| t.traces.len()).sum::<usize>(),
            depth_axis.min,
            depth_axis.max
        );

        Ok(NormalizedGeometry {
            tracks,
            depth_axis,
            frame: FrameDecoration {
                width: sizing.track_width() * num_tracks as f64,
                height: sizing.total_height(),
                header_fraction: sizing.header_fraction(),
                track_boundaries: track_boundaries(num_tracks)
            }
        })
    }

    fn depth_axis(&self, depths: &[f64], key: Option<&str>) -> DepthAxis {
        let (min, max) = depths
            .iter()
            .copied()
            .filter(|d| !d.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, d| match acc {
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
                None => Some((d, d))
            })
            .unwrap_or((f64::NAN, f64::NAN));
        DepthAxis {
            key: key.map(str::to_owned),
            min,
            max,
            inverted: true,
            shared: true
        }
    }

    fn compose_track(&self,
                     index: usize,
                     track: &Track,
                     frame: &WellFrame,
                     depths: &[f64],
                     depth_axis: &DepthAxis,
                     band: &HeaderBand,
                     config: &LayoutConfig) -> Result<TrackGeometry, LayoutError> {
        let n = config.tracks().len() as f64;
        let mut traces = Vec::new();
        let mut headers = Vec::new();

        for (slot, name) in track.curves().iter().enumerate() {
            let Some(column) = frame.column(name) else {
                log::warn!("track {}: curve '{}' is not in the frame, skipped", index, name);
                continue;
            };
            let style = config.style_or_default(name);
            let scale = AxisScale::new(config.range_or_default(index, name), style.logarithmic())
                .ok_or_else(|| LayoutError::DegenerateRange { track: index, curve: name.clone() })?;

            traces.push(self.curve_trace(index, column, depths, &scale, &style));
            headers.push(self.header_slot(slot, name, &scale, &style, band));
        }

        let grid = config.grid(index).filter(|g| g.is_drawn());
        let groups = config.points().get(&index).filter(|g| !g.is_empty());

        let mut grid_lines = Vec::new();
        let mut marker_groups = Vec::new();
        if grid.is_some() || groups.is_some() {
            let anchor = self.anchor_scale(index, track, frame, config)?;
            if let Some(grid) = grid {
                grid_lines = grid
                    .values()
                    .iter()
                    .map(|&value| GridLine {
                        value,
                        x: anchor.normalize(value),
                        y0: depth_axis.min,
                        y1: depth_axis.max,
                        color: GRID_COLOR.to_owned(),
                        width: GRID_WIDTH
                    })
                    .collect();
            }
            if let Some(groups) = groups {
                marker_groups = groups
                    .iter()
                    .map(|(group, points)| MarkerGroup {
                        group: group.clone(),
                        style: points.style().clone(),
                        markers: points
                            .points()
                            .iter()
                            .map(|&(value, depth)| Marker {
                                x: anchor.normalize(value),
                                depth,
                                value,
                                label: format!(
                                    "{}: {}, Depth: {}",
                                    group,
                                    format_general(value, SIGNIFICANT_DIGITS),
                                    format_general(depth, SIGNIFICANT_DIGITS)
                                )
                            })
                            .collect()
                    })
                    .collect();
            }
        }

        Ok(TrackGeometry {
            index,
            x_axis: TrackAxis {
                domain: [index as f64 / n, (index + 1) as f64 / n],
                range: [0.0, 1.0],
                fixed_range: true
            },
            traces,
            headers,
            grid_lines,
            marker_groups
        })
    }

    /// Scale of the curve grid lines and point markers are positioned against:
    /// the track's named anchor, else its first member present in the frame.
    fn anchor_scale(&self,
                    index: usize,
                    track: &Track,
                    frame: &WellFrame,
                    config: &LayoutConfig) -> Result<AxisScale, LayoutError> {
        let anchor = match track.anchor() {
            Some(anchor) if frame.contains(anchor) => anchor,
            Some(anchor) => {
                return Err(LayoutError::NoAnchorCurve { track: index, curve: anchor.clone() });
            }
            None => track
                .curves()
                .iter()
                .find(|c| frame.contains(c))
                .ok_or(LayoutError::EmptyTrack { track: index })?
        };
        let range = config
            .range(index, anchor)
            .ok_or_else(|| LayoutError::MissingAnchorRange { track: index, curve: anchor.clone() })?;
        AxisScale::new(range, config.style_or_default(anchor).logarithmic())
            .ok_or_else(|| LayoutError::DegenerateRange { track: index, curve: anchor.clone() })
    }

    fn curve_trace(&self,
                   index: usize,
                   column: &FrameColumn,
                   depths: &[f64],
                   scale: &AxisScale,
                   style: &CurveStyle) -> CurveTrace {
        let (normalized, substituted) = scale.normalize_samples(column.values());
        if substituted > 0 {
            log::warn!(
                "track {}: {} non-positive samples of '{}' floored for log display",
                index, substituted, column.name()
            );
        }

        let copies = [CopyKind::Primary, CopyKind::Lower, CopyKind::Upper]
            .into_iter()
            .map(|kind| TraceCopy {
                kind,
                offset: kind.offset(),
                opacity: kind.opacity(),
                points: normalized
                    .iter()
                    .zip(depths)
                    .map(|(&x, &d)| [x + kind.offset(), d])
                    .collect(),
                hover_text: (kind == CopyKind::Primary).then(|| {
                    column
                        .values()
                        .iter()
                        .map(|&v| format!("{}: {}", column.name(), format_general(v, SIGNIFICANT_DIGITS)))
                        .collect()
                })
            })
            .collect();

        CurveTrace {
            curve: column.name().clone(),
            unit: column.unit().clone(),
            style: style.clone(),
            line_shape: STEP_LINE_SHAPE.to_owned(),
            copies
        }
    }

    fn header_slot(&self,
                   slot: usize,
                   name: &str,
                   scale: &AxisScale,
                   style: &CurveStyle,
                   band: &HeaderBand) -> HeaderSlot {
        let y = band.rule_y(slot);
        let (left, right) = scale.display_bounds();
        let label = |text: String, x: f64, y: f64, anchor: TextAnchor| TextAnnotation {
            text,
            x,
            y,
            anchor,
            color: style.color().clone()
        };
        HeaderSlot {
            curve: name.to_owned(),
            slot,
            name: label(truncate_name(name, HEADER_NAME_CHARS), 0.5, y + band.name_lift, TextAnchor::Center),
            rule: HeaderRule {
                y,
                x0: 0.0,
                x1: 1.0,
                color: style.color().clone(),
                thickness: style.thickness(),
                line_style: style.line_style()
            },
            left_label: label(format!("{:.2}", left), 0.0, y, TextAnchor::Left),
            right_label: label(format!("{:.2}", right), 1.0, y, TextAnchor::Right)
        }
    }
}

fn track_boundaries(num_tracks: usize) -> Vec<f64> {
    if num_tracks == 0 {
        return Vec::new();
    }
    (0..=num_tracks)
        .map(|i| i as f64 / num_tracks as f64)
        .collect()
}
