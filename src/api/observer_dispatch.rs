use tracing::warn;

use crate::core::ViewSize;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn emit_resize(&mut self, size: ViewSize) {
        for observer in self.observers.values_mut() {
            observer.on_resize(size);
        }
    }

    pub(super) fn emit_range_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let range = match self.viewport.normalized_range() {
            Ok(range) => range,
            Err(err) => {
                warn!(error = %err, "skipping range notification");
                return;
            }
        };
        for observer in self.observers.values_mut() {
            observer.on_range_changed(range);
        }
    }

    pub(super) fn emit_position_changed(&mut self) {
        let position = self.cursor.position();
        for observer in self.observers.values_mut() {
            observer.on_position_changed(position);
        }
    }
}
