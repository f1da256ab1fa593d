//! glchart: viewport and data-windowing engine for large time-series charts.
//!
//! The `core` module answers "what is visible and where does it go": sparse
//! range min/max indexes, index lookup, the camera/scale model and the
//! playback follow policy. `api` wraps it in a [`ChartEngine`] facade that
//! emits backend-agnostic frames through the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartObserver, SeriesSpec};
pub use error::{ChartError, ChartResult};
