use serde::{Deserialize, Serialize};

use crate::core::{
    Color, FollowMode, NormalizedRange, OverviewIndicator, PlaybackCursor, SeriesId, SeriesStats,
    ViewSize, VisibleRange,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: SeriesId,
    pub name: String,
    pub color: Color,
    pub len: usize,
    pub stats: SeriesStats,
}

/// Serializable viewport and playback state used by regression tests and
/// debugging tooling.
///
/// Range fields are `None` until a series is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub chart_size: ViewSize,
    pub graph_size: ViewSize,
    pub units_per_pixel: f64,
    pub camera_x: f64,
    pub vertical_zoom: f64,
    pub normalized_range: Option<NormalizedRange>,
    pub visible_range: Option<VisibleRange>,
    pub cursor: PlaybackCursor,
    pub follow_mode: FollowMode,
    pub overview_indicator: Option<OverviewIndicator>,
    pub series: Vec<SeriesSnapshot>,
    pub observers: Vec<String>,
}
