use std::env;
use std::process::ExitCode;

use welllog::configuration::Configuration;
use welllog::layout::composer::TrackLayoutComposer;
use welllog::layout::layoutconfig::LayoutConfig;
use welllog::layout::trackgrid::TrackGrid;
use welllog::manager::manager::IManager;
use welllog::pipeline::prepare_well;
use welllog::welldata::deviationsurvey::DeviationSurvey;
use welllog::welldata::logcurve::LogCurve;
use welllog::welldata::well::Well;

const STEP: f64 = 0.5;

fn synthetic_well() -> Result<Well, Box<dyn std::error::Error>> {
    let depths: Vec<f64> = (0..=400).map(|i| 1200.0 + 0.5 * i as f64).collect();
    let wave = |scale: f64, phase: f64| -> Vec<f64> {
        depths
            .iter()
            .map(|d| scale * (1.0 + ((d - 1200.0) / 15.0 + phase).sin()))
            .collect()
    };
    let rt: Vec<f64> = wave(1.0, 0.3).iter().map(|v| 10f64.powf(*v)).collect();
    let nphi: Vec<f64> = wave(0.12, 1.1);
    let rhob: Vec<f64> = wave(0.25, 2.0).iter().map(|v| v + 2.1).collect();
    let dt: Vec<f64> = wave(30.0, 0.7).iter().map(|v| v + 60.0).collect();
    let gr = wave(70.0, 0.0);
    Ok(Well::new("DEMO-1")
        .with_curve(LogCurve::new("GR", "gAPI", depths.clone(), gr)?)
        .with_curve(LogCurve::new("ILD", "ohm.m", depths.clone(), rt.clone())?)
        .with_curve(LogCurve::new("ILM", "ohm.m", depths.clone(), rt.iter().map(|v| 0.6 * v).collect())?)
        .with_curve(LogCurve::new("DT", "us/ft", depths.clone(), dt)?)
        .with_curve(LogCurve::new("NPHI", "v/v", depths.clone(), nphi)?)
        .with_curve(LogCurve::new("RHOB", "g/cm3", depths, rhob)?))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::new();
    let config_path = env::args().nth(1);
    if let Some(path) = &config_path {
        config.from_reader(path)?;
    }

    let survey = DeviationSurvey::from_stations(&[
        (0.0, 0.0, 0.0),
        (800.0, 2.0, 45.0),
        (1300.0, 12.0, 50.0)
    ]);
    let (well, frame, deviation) = prepare_well(synthetic_well()?, Some(&survey), Some(STEP))?.into_parts();
    log::info!(
        "well '{}' prepared: {} rows, TVD at TD {:.2}",
        well.name(),
        frame.len(),
        deviation.tvd().samples().last().copied().unwrap_or(f64::NAN)
    );

    let layout = match config.layout_manager().names().first() {
        Some(name) => config.layout(name)?,
        None => LayoutConfig::default_preset(&config.alias_table(), &frame)
            .with_grid(0, TrackGrid::new(true, vec![30.0, 60.0, 90.0, 120.0]))
    };
    let geometry = TrackLayoutComposer::new().compose(&frame, &layout)?;
    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
