use crate::core::{FollowAction, FollowMode};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Moves the position indicator, recentring the window when following.
    pub fn set_current_position(&mut self, position: f64) -> ChartResult<FollowAction> {
        let action = self
            .cursor
            .set_current_position(position, &mut self.viewport)?;
        self.emit_position_changed();
        if matches!(
            action,
            FollowAction::Recentred | FollowAction::AssertShown { recentred: true }
        ) {
            self.emit_range_changed();
        }
        Ok(action)
    }

    #[must_use]
    pub fn current_position(&self) -> f64 {
        self.cursor.position()
    }

    pub fn set_follow_enabled(&mut self, enabled: bool) {
        self.cursor.set_follow_enabled(enabled);
    }

    #[must_use]
    pub fn follow_mode(&self) -> FollowMode {
        self.cursor.follow_mode()
    }
}
