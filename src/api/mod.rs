mod axis_ticks;
mod drawables;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod navigation_controller;
mod observer;
mod observer_dispatch;
mod observer_registry;
mod overview_controller;
mod playback_controller;
mod render_frame_builder;
mod snap_resolver;
mod snapshot_controller;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::{AxisLabelMode, ChartEngineConfig, SeriesSpec};
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartEngineConfigJsonContractV1, ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
    EngineSnapshotJsonContractV1,
};
pub use observer::ChartObserver;
