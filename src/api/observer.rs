use crate::core::{NormalizedRange, ViewSize};

/// Typed callbacks fired by [`super::ChartEngine`] after a state change.
///
/// All hooks default to no-ops; observers implement only what they need.
/// Hooks run synchronously, after the engine state is fully updated.
pub trait ChartObserver {
    fn id(&self) -> &str;

    fn on_resize(&mut self, _size: ViewSize) {}

    fn on_range_changed(&mut self, _range: NormalizedRange) {}

    fn on_position_changed(&mut self, _position: f64) {}
}
