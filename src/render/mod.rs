mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

pub use crate::core::Color;

use crate::core::{PixelRect, PlaybackCursor, ViewSize, Viewport};
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from viewport and playback logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Shared read-only state handed to every drawable during one draw pass.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub chart_size: ViewSize,
    pub viewport: &'a Viewport,
    pub cursor: PlaybackCursor,
    pub line_thickness: f64,
    pub text_color: Color,
    pub font_size_px: f64,
}

/// One rectangular piece of the chart (plot, axis, legend, overview).
///
/// Implementors draw in their own region; `region` is in chart pixels with a
/// top-left origin.
pub trait DrawableWindow {
    fn region(&self) -> PixelRect;

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame)
    -> ChartResult<()>;
}
