use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot, SeriesSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let has_series = !self.viewport.series().is_empty();
        let collection = self.viewport.series();
        let series = collection
            .iter()
            .filter_map(|(id, entry)| {
                collection.resolved_color(id).map(|color| SeriesSnapshot {
                    id,
                    name: entry.name().to_owned(),
                    color,
                    len: entry.len(),
                    stats: entry.stats(),
                })
            })
            .collect();

        Ok(EngineSnapshot {
            chart_size: self.chart_size,
            graph_size: self.viewport.view_size(),
            units_per_pixel: self.viewport.units_per_pixel(),
            camera_x: self.viewport.camera_x(),
            vertical_zoom: self.viewport.vertical_zoom(),
            normalized_range: has_series
                .then(|| self.viewport.normalized_range())
                .transpose()?,
            visible_range: has_series
                .then(|| self.viewport.visible_range())
                .transpose()?,
            cursor: self.cursor,
            follow_mode: self.cursor.follow_mode(),
            overview_indicator: if has_series {
                self.overview_indicator()?
            } else {
                None
            },
            series,
            observers: self.observers.keys().cloned().collect(),
        })
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to serialize snapshot: {e}"))
        })
    }
}
