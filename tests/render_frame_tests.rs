use chrono::{Duration, TimeZone, Utc};
use glchart::api::{AxisLabelMode, ChartEngine, ChartEngineConfig, SeriesSpec};
use glchart::core::{OverviewConfig, PolylinePoint, Sample, ViewSize};
use glchart::render::{
    Color, NullRenderer, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use glchart::ChartError;
use rust_decimal::Decimal;

const POSITION_RED: Color = Color::rgb(1.0, 0.0, 0.0);

fn ramp(name: &str, len: usize) -> SeriesSpec {
    SeriesSpec::new(
        name,
        (0..len).map(|i| Sample::new(i as f64, i as f64)).collect(),
    )
}

fn engine_with(config: ChartEngineConfig, series: Vec<SeriesSpec>) -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), config, series).expect("engine")
}

#[test]
fn render_without_overview_draws_one_frame() {
    let mut engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)),
        vec![ramp("ramp", 1001)],
    );
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_polyline_count > 1);
    assert!(renderer.last_point_count >= 901);
    assert_eq!(renderer.last_rect_count, 2);
}

#[test]
fn series_line_stays_inside_graph_region() {
    let engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)),
        vec![ramp("ramp", 5001)],
    );
    let frame = engine.build_render_frame().expect("frame");
    let graph = engine.graph_rect();

    let line = &frame.polylines[0];
    assert!(line.points.len() >= 2);
    for point in &line.points {
        assert!(point.x >= graph.x - 1e-9 && point.x <= graph.x + graph.width + 1e-9);
        assert!(point.y >= graph.y - 1e-9 && point.y <= graph.bottom() + 1e-9);
    }
}

#[test]
fn legend_has_one_cell_per_series() {
    let engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)),
        vec![
            ramp("a", 100),
            ramp("b", 100).with_color(Color::rgb(0.0, 0.0, 0.5)),
        ],
    );
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.rects[1].width, frame.rects[2].width);
    assert_eq!(frame.rects[2].fill_color, Color::rgb(0.0, 0.0, 0.5));

    let b_label = frame
        .texts
        .iter()
        .find(|text| text.text == "b")
        .expect("legend label");
    assert_eq!(b_label.color, Color::rgb(1.0, 1.0, 1.0));
    assert_eq!(b_label.h_align, TextHAlign::Center);
}

#[test]
fn empty_chart_produces_background_only() {
    let mut engine = engine_with(ChartEngineConfig::new(ViewSize::new(800, 300)), Vec::new());
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.polylines.is_empty());
    assert!(frame.texts.is_empty());

    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn background_fill_covers_chart_first() {
    let navy = Color::from_hex(0x000080);
    let engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)).with_background_color(navy),
        vec![ramp("ramp", 100)],
    );
    let frame = engine.build_render_frame().expect("frame");

    let background = frame.rects[0];
    assert_eq!((background.x, background.y), (0.0, 0.0));
    assert_eq!((background.width, background.height), (1000.0, 400.0));
    assert_eq!(background.fill_color, navy);

    let default = ChartEngineConfig::new(ViewSize::new(10, 10)).background_color;
    assert_eq!(default, Color::rgb(1.0, 1.0, 1.0));
}

#[test]
fn position_indicator_follows_cursor() {
    let mut engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)).with_follow_enabled(false),
        vec![ramp("ramp", 1001)],
    );
    engine.set_current_position(450.0).expect("position");
    let frame = engine.build_render_frame().expect("frame");
    let graph = engine.graph_rect();

    let indicators: Vec<_> = frame
        .polylines
        .iter()
        .filter(|line| line.color == POSITION_RED)
        .collect();
    assert_eq!(indicators.len(), 1);
    let x = indicators[0].points[0].x;
    assert!((x - (graph.x + 450.0)).abs() < 1e-9);
    assert!(frame.texts.iter().any(|text| text.text == "450.00"));

    engine.set_current_position(5_000.0).expect("position");
    let frame = engine.build_render_frame().expect("frame");
    assert!(!frame.polylines.iter().any(|line| line.color == POSITION_RED));
}

#[test]
fn unix_millis_axis_labels_render_clock_time() {
    let samples = (0..=60)
        .map(|i| Sample::new(f64::from(i) * 1_000.0, f64::from(i)))
        .collect();
    let config = ChartEngineConfig::new(ViewSize::new(1000, 400))
        .with_axis_labels(AxisLabelMode::UnixMillis, AxisLabelMode::Decimal { precision: 1 });
    let mut engine = engine_with(config, vec![SeriesSpec::new("clock", samples)]);
    engine.set_visible_range(0.0, 1.0).expect("set range");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.texts.iter().any(|text| text.text == "00:00:00.000"));
    assert!(frame.texts.iter().any(|text| text.text == "00:01:00.000"));
}

#[test]
fn decimal_time_samples_label_as_clock_time() {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 1, 0, 0)
        .single()
        .expect("valid time");
    let samples = (0..120)
        .map(|i| {
            Sample::from_decimal_time(start + Duration::seconds(i), Decimal::new(i, 1))
                .expect("sample")
        })
        .collect();
    let config = ChartEngineConfig::new(ViewSize::new(1000, 400))
        .with_axis_labels(AxisLabelMode::UnixMillis, AxisLabelMode::default());
    let mut engine = engine_with(config, vec![SeriesSpec::new("clock", samples)]);
    engine.set_visible_range(0.0, 1.0).expect("set range");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.texts.iter().any(|text| text.text == "01:00:00.000"));
    assert!(frame.texts.iter().any(|text| text.text == "01:01:59.000"));
    assert!(!frame.texts.iter().any(|text| text.text.starts_with("17:")));
}

#[test]
fn overview_is_rendered_as_second_frame() {
    let config = ChartEngineConfig::new(ViewSize::new(1000, 400))
        .with_overview(OverviewConfig::default());
    let mut engine = engine_with(config, vec![ramp("ramp", 1001)]);
    engine.set_visible_range(0.25, 0.5).expect("set range");

    let overview = engine
        .build_overview_frame()
        .expect("overview frame")
        .expect("overview enabled");
    assert_eq!(overview.size, ViewSize::new(1000, 60));
    assert_eq!(overview.rects.len(), 2);
    assert!((overview.rects[1].x - 250.0).abs() < 1e-9);
    assert!((overview.rects[1].width - 250.0).abs() < 1e-9);
    assert_eq!(overview.polylines.len(), 1);

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 2);
}

#[test]
fn overview_frame_is_absent_when_disabled() {
    let engine = engine_with(
        ChartEngineConfig::new(ViewSize::new(1000, 400)),
        vec![ramp("ramp", 10)],
    );
    assert!(engine.build_overview_frame().expect("overview").is_none());
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let size = ViewSize::new(100, 100);
    let black = Color::rgb(0.0, 0.0, 0.0);

    let short_line = RenderFrame::new(size).with_polyline(PolylinePrimitive::new(
        vec![PolylinePoint { x: 0.0, y: 0.0 }],
        1.0,
        black,
    ));
    assert!(matches!(
        short_line.validate(),
        Err(ChartError::InvalidArgument(_))
    ));

    let thin = RenderFrame::new(size)
        .with_polyline(PolylinePrimitive::segment(0.0, 0.0, 1.0, 1.0, 0.0, black));
    assert!(thin.validate().is_err());

    let bad_rect =
        RenderFrame::new(size).with_rect(RectPrimitive::new(0.0, 0.0, f64::NAN, 1.0, black));
    assert!(bad_rect.validate().is_err());

    let empty_text = RenderFrame::new(size).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        black,
        TextHAlign::Left,
    ));
    assert!(empty_text.validate().is_err());

    let ok = RenderFrame::new(size)
        .with_polyline(PolylinePrimitive::segment(0.0, 0.0, 1.0, 1.0, 1.0, black))
        .with_text(TextPrimitive::new("x", 1.0, 1.0, 12.0, black, TextHAlign::Left));
    assert!(ok.validate().is_ok());
}

#[test]
fn null_renderer_rejects_invalid_frame() {
    use glchart::render::Renderer;

    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(ViewSize::new(0, 10));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}
