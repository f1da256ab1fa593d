use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{OverviewSync, PlaybackCursor, Series, ViewSize, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, SeriesSpec};

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine.
    ///
    /// Every series is validated before any is attached, so a bad series
    /// fails construction instead of leaving a partial chart behind.
    pub fn new(renderer: R, config: ChartEngineConfig, series: Vec<SeriesSpec>) -> ChartResult<Self> {
        let config = config.validate()?;

        let series = series
            .into_iter()
            .map(|spec| Series::new(spec.name, spec.color, spec.samples))
            .collect::<ChartResult<Vec<_>>>()?;

        let mut min_height_warned = false;
        let chart_size = enforce_min_height(
            config.chart_size,
            config.min_chart_height_px,
            &mut min_height_warned,
        )
        .validate()?;
        let mut viewport = Viewport::new(config.layout.graph_size(chart_size)?, config.viewport)?;
        for entry in series {
            viewport.attach_series(entry)?;
        }
        let overview = config.overview.map(OverviewSync::new).transpose()?;
        let interaction = InteractionState::new(config.gestures)?;

        debug!(
            width = chart_size.width,
            height = chart_size.height,
            series = viewport.series().len(),
            overview = overview.is_some(),
            "create chart engine"
        );

        Ok(Self {
            renderer,
            config,
            chart_size,
            viewport,
            cursor: PlaybackCursor::new(config.follow_enabled),
            overview,
            interaction,
            observers: IndexMap::new(),
            min_height_warned,
        })
    }

    /// Applies a new chart size and notifies resize observers.
    ///
    /// The viewport keeps its scale and camera, so a wider chart shows more
    /// data rather than stretching the current window.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<ViewSize> {
        let chart_size = enforce_min_height(
            ViewSize::new(width, height),
            self.config.min_chart_height_px,
            &mut self.min_height_warned,
        )
        .validate()?;
        let graph_size = self.config.layout.graph_size(chart_size)?;
        self.viewport.update_view(graph_size)?;
        self.chart_size = chart_size;
        debug!(width = chart_size.width, height = chart_size.height, "resize chart");
        self.emit_resize(chart_size);
        Ok(chart_size)
    }
}

fn enforce_min_height(size: ViewSize, min_height_px: u32, warned: &mut bool) -> ViewSize {
    if size.height >= min_height_px {
        return size;
    }
    if !*warned {
        warn!(
            requested_height = size.height,
            min_height = min_height_px,
            "chart height below minimum; using minimum height"
        );
        *warned = true;
    }
    ViewSize::new(size.width, min_height_px)
}
