use approx::assert_relative_eq;
use glchart::api::{ChartEngine, ChartEngineConfig, SeriesSpec};
use glchart::core::{OverviewConfig, Sample, ViewSize};
use glchart::render::NullRenderer;
use glchart::ChartError;

fn series() -> Vec<SeriesSpec> {
    vec![SeriesSpec::new(
        "ramp",
        (0..=1000).map(|i| Sample::new(f64::from(i), f64::from(i))).collect(),
    )]
}

fn engine_with_overview() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(ViewSize::new(1000, 400))
        .with_overview(OverviewConfig::default());
    ChartEngine::new(NullRenderer::default(), config, series()).expect("engine")
}

#[test]
fn drag_moves_main_window() {
    let mut engine = engine_with_overview();
    engine.set_visible_range(0.4, 0.6).expect("set range");

    assert!(engine.overview_drag(100.0).expect("drag"));
    let range = engine.normalized_range().expect("range");
    assert_relative_eq!(range.min(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(range.max(), 0.7, epsilon = 1e-9);

    assert!(!engine.overview_drag(400.0).expect("drag past end"));
}

#[test]
fn scroll_zooms_main_window() {
    let mut engine = engine_with_overview();
    engine.set_visible_range(0.4, 0.6).expect("set range");

    let range = engine.overview_scroll(250.0).expect("scroll");
    assert_relative_eq!(range.min(), 0.3875, epsilon = 1e-9);
    assert_relative_eq!(range.max(), 0.6125, epsilon = 1e-9);
}

#[test]
fn indicator_follows_main_window() {
    let mut engine = engine_with_overview();
    engine.set_visible_range(0.1, 0.3).expect("set range");
    let indicator = engine
        .overview_indicator()
        .expect("indicator")
        .expect("overview enabled");
    assert_relative_eq!(indicator.left_px, 100.0, epsilon = 1e-6);
    assert_relative_eq!(indicator.width_px, 200.0, epsilon = 1e-6);

    engine.resize_overview(500, 40).expect("resize overview");
    let indicator = engine
        .overview_indicator()
        .expect("indicator")
        .expect("overview enabled");
    assert_relative_eq!(indicator.left_px, 50.0, epsilon = 1e-6);
}

#[test]
fn overview_calls_without_strip_are_precondition_errors() {
    let config = ChartEngineConfig::new(ViewSize::new(1000, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config, series()).expect("engine");

    assert!(engine.overview_indicator().expect("indicator").is_none());
    assert!(matches!(
        engine.overview_drag(10.0),
        Err(ChartError::PreconditionViolation(_))
    ));
    assert!(matches!(
        engine.overview_scroll(10.0),
        Err(ChartError::PreconditionViolation(_))
    ));
    assert!(matches!(
        engine.resize_overview(100, 10),
        Err(ChartError::PreconditionViolation(_))
    ));
}
