use crate::alias::aliastable::AliasTable;
use crate::layout::curverange::CurveRange;
use crate::layout::curvestyle::{
    CurveStyle,
    LineStyle
};
use crate::layout::layoutconfig::LayoutConfig;
use crate::layout::track::Track;
use crate::welldata::wellframe::WellFrame;

impl LayoutConfig {
    /// Standard three track layout: gamma ray; deep and shallow resistivity on
    /// a log scale; sonic, neutron and density overlaid.
    ///
    /// Groups that do not resolve keep their group name as curve name, so the
    /// composer simply skips them.
    pub fn default_preset(aliases: &AliasTable, frame: &WellFrame) -> LayoutConfig {
        let name = |group: &str| {
            aliases
                .resolve_group(group, frame)
                .unwrap_or(group)
                .to_owned()
        };
        let (gr, resdeep, resshal) = (name("gr"), name("resdeep"), name("resshal"));
        let (sonic, neutron, density) = (name("sonic"), name("neutron"), name("density"));

        // porosity logged in percent rather than fraction
        let neutron_range = match frame.column_mean(&neutron) {
            Some(mean) if mean >= 1.0 => CurveRange::new(54.0, -6.0),
            _ => CurveRange::new(0.54, -0.06)
        };

        LayoutConfig::new(vec![
            Track::new([gr.clone()]),
            Track::new([resdeep.clone(), resshal.clone()]),
            Track::new([sonic.clone(), neutron.clone(), density.clone()])
        ])
        .with_range(0, &gr, CurveRange::new(0.0, 150.0))
        .with_range(1, &resdeep, CurveRange::new(0.02, 200.0))
        .with_range(1, &resshal, CurveRange::new(0.02, 200.0))
        .with_range(2, &density, CurveRange::new(1.8, 2.8))
        .with_range(2, &neutron, neutron_range)
        .with_range(2, &sonic, CurveRange::new(140.0, 40.0))
        .with_style(&gr, CurveStyle::new("#276b02", 2.0, LineStyle::Solid, false))
        .with_style(&resdeep, CurveStyle::new("#818181", 1.5, LineStyle::Solid, true))
        .with_style(&resshal, CurveStyle::new("#c71b1b", 1.5, LineStyle::DashDot, true))
        .with_style(&density, CurveStyle::new("#b9602e", 2.0, LineStyle::Solid, false))
        .with_style(&neutron, CurveStyle::new("#1c34aa", 1.0, LineStyle::Dot, false))
        .with_style(&sonic, CurveStyle::new("#818181", 1.5, LineStyle::Solid, false))
    }
}
