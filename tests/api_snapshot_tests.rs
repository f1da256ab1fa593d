use glchart::api::{
    ChartEngine, ChartEngineConfig, ChartObserver, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    EngineSnapshotJsonContractV1, SeriesSpec,
};
use glchart::core::{FollowMode, OverviewConfig, ViewSize};
use glchart::render::NullRenderer;
use glchart::ChartError;

struct NamedObserver(&'static str);

impl ChartObserver for NamedObserver {
    fn id(&self) -> &str {
        self.0
    }
}

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(ViewSize::new(800, 300))
        .with_overview(OverviewConfig::default());
    ChartEngine::new(
        NullRenderer::default(),
        config,
        vec![
            SeriesSpec::from_pairs("temperature", &[[0.0, 20.0], [10.0, 22.0], [20.0, 21.0]]),
            SeriesSpec::from_pairs("pressure", &[[0.0, 1.0], [20.0, 3.0]]),
        ],
    )
    .expect("engine init")
}

#[test]
fn snapshot_lists_series_and_observers_in_order() {
    let mut engine = engine();
    engine
        .register_observer(Box::new(NamedObserver("zeta")))
        .expect("register");
    engine
        .register_observer(Box::new(NamedObserver("alpha")))
        .expect("register");

    let snapshot = engine.snapshot().expect("snapshot");
    let names: Vec<&str> = snapshot.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["temperature", "pressure"]);
    assert_eq!(snapshot.series[0].len, 3);
    assert_eq!(snapshot.observers, vec!["zeta", "alpha"]);
    assert_eq!(snapshot.follow_mode, FollowMode::Following);
    assert!(snapshot.overview_indicator.is_some());
    assert_eq!(snapshot.graph_size, ViewSize::new(720, 180));
}

#[test]
fn snapshot_without_series_has_no_ranges() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(ViewSize::new(800, 300)),
        Vec::new(),
    )
    .expect("engine init");

    let snapshot = engine.snapshot().expect("snapshot");
    assert!(snapshot.normalized_range.is_none());
    assert!(snapshot.visible_range.is_none());
    assert!(snapshot.overview_indicator.is_none());
    assert!(snapshot.series.is_empty());
}

#[test]
fn snapshot_json_roundtrip() {
    let mut engine = engine();
    engine.set_visible_range(0.25, 0.75).expect("set range");

    let json = engine.snapshot_json_pretty().expect("snapshot should serialize");
    let decoded: EngineSnapshot =
        serde_json::from_str(&json).expect("snapshot json should deserialize");

    assert_eq!(decoded.series.len(), 2);
    assert_eq!(decoded.series[1].name, "pressure");
    assert_eq!(decoded.chart_size, ViewSize::new(800, 300));
}

#[test]
fn contract_v1_wraps_snapshot_with_schema_version() {
    let engine = engine();
    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");

    let payload: EngineSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract json");
    assert_eq!(payload.schema_version, ENGINE_SNAPSHOT_JSON_SCHEMA_V1);

    let compat = EngineSnapshot::from_json_compat_str(&json).expect("compat parse");
    assert_eq!(compat.series.len(), 2);
}

#[test]
fn compat_parser_accepts_bare_snapshot() {
    let engine = engine();
    let json = engine.snapshot_json_pretty().expect("snapshot");
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("bare snapshot");
    assert_eq!(parsed.series[0].name, "temperature");
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let engine = engine();
    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("json value");
    value["schema_version"] = serde_json::json!(99);

    let result = EngineSnapshot::from_json_compat_str(&value.to_string());
    assert!(matches!(result, Err(ChartError::InvalidArgument(_))));
}
