use crate::core::{
    ChartLayout, DataDomain, OverviewSync, PixelRect, PlaybackCursor, Series, SeriesId, ViewSize,
    Viewport,
};
use crate::error::ChartResult;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Full chart size after the minimum-height adjustment.
    #[must_use]
    pub fn chart_size(&self) -> ViewSize {
        self.chart_size
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.config.layout
    }

    /// Plot area in chart pixels; its size is the viewport's drawable size.
    #[must_use]
    pub fn graph_rect(&self) -> PixelRect {
        self.config.layout.graph.to_pixels(self.chart_size)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn cursor(&self) -> PlaybackCursor {
        self.cursor
    }

    #[must_use]
    pub fn overview(&self) -> Option<&OverviewSync> {
        self.overview.as_ref()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.viewport.series().get(id)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.viewport.series().len()
    }

    pub fn domain(&self) -> ChartResult<DataDomain> {
        self.viewport.domain()
    }
}
