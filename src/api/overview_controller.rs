use crate::core::{NormalizedRange, OverviewIndicator, OverviewSync, ViewSize};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Indicator geometry for the current window, `None` without an overview.
    pub fn overview_indicator(&self) -> ChartResult<Option<OverviewIndicator>> {
        let Some(overview) = self.overview.as_ref() else {
            return Ok(None);
        };
        Ok(Some(overview.indicator(self.viewport.normalized_range()?)))
    }

    /// Drags the indicator by `delta_px` overview pixels.
    ///
    /// Returns `false` when the move would push the window past the domain.
    pub fn overview_drag(&mut self, delta_px: f64) -> ChartResult<bool> {
        let fraction = self.require_overview()?.drag_delta_to_fraction(delta_px);
        self.move_range(fraction)
    }

    /// Zooms the main window from a scroll over the overview strip.
    pub fn overview_scroll(&mut self, delta: f64) -> ChartResult<NormalizedRange> {
        let percent = self.require_overview()?.scroll_delta_to_zoom(delta);
        self.zoom(percent)
    }

    pub fn resize_overview(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let Some(overview) = self.overview.as_mut() else {
            return Err(overview_missing());
        };
        overview.resize(ViewSize::new(width, height))
    }

    fn require_overview(&self) -> ChartResult<&OverviewSync> {
        self.overview.as_ref().ok_or_else(overview_missing)
    }
}

fn overview_missing() -> ChartError {
    ChartError::PreconditionViolation("chart was created without an overview strip".to_owned())
}
