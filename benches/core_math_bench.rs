use criterion::{Criterion, criterion_group, criterion_main};
use glchart::api::{ChartEngine, ChartEngineConfig, SeriesSpec};
use glchart::core::{
    PolylineSpace, RangeIndex, Sample, Series, ViewSize, Viewport, ViewportConfig,
    project_visible_polyline,
};
use glchart::render::NullRenderer;
use std::hint::black_box;

fn wave(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, (x * 0.013).sin() * 50.0 + (x * 0.0007).cos() * 200.0)
        })
        .collect()
}

fn bench_range_index_build_100k(c: &mut Criterion) {
    let values: Vec<f64> = wave(100_000).iter().map(|sample| sample.y).collect();

    c.bench_function("range_index_build_100k", |b| {
        b.iter(|| {
            let _ = RangeIndex::build(black_box(&values)).expect("index should build");
        })
    });
}

fn bench_range_index_query_100k(c: &mut Criterion) {
    let values: Vec<f64> = wave(100_000).iter().map(|sample| sample.y).collect();
    let index = RangeIndex::build(&values).expect("index should build");

    c.bench_function("range_index_min_max_100k", |b| {
        b.iter(|| {
            let _ = index
                .min_max(black_box(12_345), black_box(87_654))
                .expect("query should succeed");
        })
    });
}

fn bench_visible_range_after_pan_100k(c: &mut Criterion) {
    let mut viewport =
        Viewport::new(ViewSize::new(1600, 600), ViewportConfig::default()).expect("viewport");
    viewport
        .attach_series(Series::new("wave", None, wave(100_000)).expect("series"))
        .expect("attach");
    viewport.set_visible_range(0.2, 0.6).expect("set range");

    c.bench_function("visible_range_after_pan_100k", |b| {
        b.iter(|| {
            viewport.move_camera(black_box(1.0)).expect("pan");
            let _ = viewport.visible_range().expect("visible range");
        })
    });
}

fn bench_polyline_projection_100k(c: &mut Criterion) {
    let mut viewport =
        Viewport::new(ViewSize::new(1600, 600), ViewportConfig::default()).expect("viewport");
    viewport
        .attach_series(Series::new("wave", None, wave(100_000)).expect("series"))
        .expect("attach");
    viewport.set_visible_range(0.0, 1.0).expect("set range");
    let (_, series) = viewport.series().iter().next().expect("series");

    c.bench_function("polyline_projection_envelope_100k", |b| {
        b.iter(|| {
            let _ = project_visible_polyline(
                black_box(series),
                black_box(&viewport),
                PolylineSpace::LocalPixels,
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_engine_render_frame_100k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(ViewSize::new(1600, 900));
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        config,
        vec![SeriesSpec::new("wave", wave(100_000))],
    )
    .expect("engine init");
    engine.set_visible_range(0.1, 0.9).expect("set range");

    c.bench_function("engine_render_frame_100k", |b| {
        b.iter(|| {
            let _ = engine
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_range_index_build_100k,
    bench_range_index_query_100k,
    bench_visible_range_after_pan_100k,
    bench_polyline_projection_100k,
    bench_engine_render_frame_100k
);
criterion_main!(benches);
