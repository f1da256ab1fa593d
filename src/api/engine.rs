use indexmap::IndexMap;

use crate::core::{OverviewSync, PlaybackCursor, ViewSize, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEngineConfig, ChartObserver};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the viewport, playback cursor, optional overview strip
/// and observers, and turns their state into frames for the renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) chart_size: ViewSize,
    pub(super) viewport: Viewport,
    pub(super) cursor: PlaybackCursor,
    pub(super) overview: Option<OverviewSync>,
    pub(super) interaction: InteractionState,
    pub(super) observers: IndexMap<String, Box<dyn ChartObserver>>,
    pub(super) min_height_warned: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the frames for the current state and hands them to the renderer:
    /// the main chart first, then the overview strip when there is one.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        let overview = self.build_overview_frame()?;
        self.renderer.render(&frame)?;
        if let Some(overview) = overview {
            self.renderer.render(&overview)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
