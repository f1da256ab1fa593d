use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{NormalizedRange, VisibleRange, Viewport};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowMode {
    Free,
    Following,
}

/// What [`PlaybackCursor::set_current_position`] did to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowAction {
    /// Follow is off; only the indicator moved.
    None,
    /// Position is within half a window of a domain edge. The window was
    /// recentred only when the position was off-screen.
    AssertShown { recentred: bool },
    /// Mid-domain position; the window was centred on it.
    Recentred,
}

/// Scrubbing position indicator with optional auto-follow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackCursor {
    position: f64,
    follow_enabled: bool,
}

impl PlaybackCursor {
    #[must_use]
    pub fn new(follow_enabled: bool) -> Self {
        Self {
            position: 0.0,
            follow_enabled,
        }
    }

    /// Current position in data x units.
    #[must_use]
    pub fn position(self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn follow_enabled(self) -> bool {
        self.follow_enabled
    }

    pub fn set_follow_enabled(&mut self, enabled: bool) {
        self.follow_enabled = enabled;
    }

    #[must_use]
    pub fn follow_mode(self) -> FollowMode {
        if self.follow_enabled {
            FollowMode::Following
        } else {
            FollowMode::Free
        }
    }

    /// Moves the indicator and, when following, keeps it on screen.
    ///
    /// Near either domain edge the window only moves if the position left
    /// it; in the middle of the domain the window is centred on the position
    /// at the current zoom level.
    pub fn set_current_position(
        &mut self,
        position: f64,
        viewport: &mut Viewport,
    ) -> ChartResult<FollowAction> {
        if !position.is_finite() {
            return Err(ChartError::InvalidArgument(
                "playback position must be finite".to_owned(),
            ));
        }
        self.position = position;
        if !self.follow_enabled {
            return Ok(FollowAction::None);
        }

        let domain = viewport.domain()?;
        let visible = viewport.visible_range()?;
        let half_visible_width = visible.x.span() / 2.0;

        let near_start = position - domain.x.min < half_visible_width;
        let near_end = domain.x.max - position < half_visible_width;
        if near_start || near_end {
            let recentred = self.assert_line_shown(viewport, visible)?;
            return Ok(FollowAction::AssertShown { recentred });
        }

        self.center_camera(viewport)?;
        Ok(FollowAction::Recentred)
    }

    /// Centres the visible window on the current position, keeping the
    /// current coverage and never scrolling past the domain edges.
    pub fn center_camera(&self, viewport: &mut Viewport) -> ChartResult<NormalizedRange> {
        let domain = viewport.domain()?;
        let span = domain.x.span();
        if span <= 0.0 {
            return viewport.normalized_range();
        }

        let visible = viewport.visible_range()?;
        let coverage = (visible.x.span() / span).min(1.0);
        let center = (self.position - domain.x.min) / span;

        let mut min = center - coverage / 2.0;
        let mut max = center + coverage / 2.0;
        if min < 0.0 {
            max -= min;
            min = 0.0;
        }
        if max > 1.0 {
            min = (min - (max - 1.0)).max(0.0);
            max = 1.0;
        }
        trace!(position = self.position, min, max, "center camera on position");
        viewport.set_visible_range(min, max)
    }

    fn assert_line_shown(&self, viewport: &mut Viewport, visible: VisibleRange) -> ChartResult<bool> {
        if visible.x.contains(self.position) {
            return Ok(false);
        }
        self.center_camera(viewport)?;
        Ok(true)
    }
}
