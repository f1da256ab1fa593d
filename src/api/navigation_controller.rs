use tracing::{trace, warn};

use crate::core::{NormalizedRange, VisibleRange};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::{validate_range_delta, validate_zoom_percent};

/// Span multiplier per unit of zoom percent; `zoom(1.0)` widens by half.
const ZOOM_SPAN_FACTOR: f64 = 0.5;

impl<R: Renderer> ChartEngine<R> {
    /// Shows the fraction `[min, max]` of the data domain.
    pub fn set_visible_range(&mut self, min: f64, max: f64) -> ChartResult<NormalizedRange> {
        let range = self.viewport.set_visible_range(min, max)?;
        self.emit_range_changed();
        Ok(range)
    }

    pub fn visible_range(&self) -> ChartResult<VisibleRange> {
        self.viewport.visible_range()
    }

    pub fn normalized_range(&self) -> ChartResult<NormalizedRange> {
        self.viewport.normalized_range()
    }

    /// Scales the visible span around its centre.
    ///
    /// Positive `percent` zooms out, negative zooms in. Values outside
    /// `[-1, 1]` are clamped. A window pushed past a domain edge is shifted
    /// back inside, then cut to `[0, 1]` if it is still too wide.
    pub fn zoom(&mut self, percent: f64) -> ChartResult<NormalizedRange> {
        let requested = validate_zoom_percent(percent)?;
        let percent = requested.clamp(-1.0, 1.0);
        if percent != requested {
            warn!(requested, applied = percent, "zoom percent clamped into [-1, 1]");
        }

        let (current_min, current_max) = self.window_fractions()?;
        let span = ((current_max - current_min) * (1.0 + ZOOM_SPAN_FACTOR * percent)).min(1.0);
        let center = (current_min + current_max) / 2.0;
        let mut min = center - span / 2.0;
        let mut max = center + span / 2.0;
        if min < 0.0 {
            max -= min;
            min = 0.0;
        }
        if max > 1.0 {
            min -= max - 1.0;
            max = 1.0;
        }
        trace!(percent, min, max, "zoom visible range");
        self.set_visible_range(min.max(0.0), max)
    }

    /// Shifts the window by `delta` of the domain.
    ///
    /// Returns `false` and leaves the window untouched when either edge would
    /// leave `[0, 1]`.
    pub fn move_range(&mut self, delta: f64) -> ChartResult<bool> {
        let delta = validate_range_delta(delta)?;
        let (current_min, current_max) = self.window_fractions()?;
        let min = current_min + delta;
        let max = current_max + delta;
        if min < 0.0 || max > 1.0 {
            trace!(delta, min, max, "move range rejected at domain edge");
            return Ok(false);
        }
        self.set_visible_range(min, max)?;
        Ok(true)
    }

    /// Camera window as domain fractions, not clamped into `[0, 1]`.
    ///
    /// `move_camera` may pan past the domain end; zoom and move must keep
    /// the real span there instead of the clamped (possibly empty) range.
    fn window_fractions(&self) -> ChartResult<(f64, f64)> {
        let domain = self.viewport.domain()?;
        let span = domain.x.span();
        if span <= 0.0 {
            let range = self.viewport.normalized_range()?;
            return Ok((range.min(), range.max()));
        }
        let window = self.viewport.visible_range()?.x;
        Ok((
            (window.min - domain.x.min) / span,
            (window.max - domain.x.min) / span,
        ))
    }

    pub fn move_camera(&mut self, delta_px: f64) -> ChartResult<f64> {
        let camera_x = self.viewport.move_camera(delta_px)?;
        self.emit_range_changed();
        Ok(camera_x)
    }

    pub fn add_units_per_pixel(&mut self, delta: f64) -> ChartResult<f64> {
        let units_per_pixel = self.viewport.add_units_per_pixel(delta)?;
        self.emit_range_changed();
        Ok(units_per_pixel)
    }

    pub fn pan_start(&mut self) {
        self.interaction.on_pan_start();
    }

    pub fn pan_end(&mut self) {
        self.interaction.on_pan_end();
    }

    /// Horizontal drag of `delta_x` input units.
    pub fn pan_gesture(&mut self, delta_x: f64) -> ChartResult<f64> {
        let delta_px = self.interaction.gestures().pan_camera_delta(delta_x);
        self.move_camera(delta_px)
    }

    /// Vertical drag of `delta_y` input units, zooming around `anchor_px`
    /// (pixels from the left edge of the plot area).
    pub fn zoom_gesture(&mut self, delta_y: f64, anchor_px: f64) -> ChartResult<f64> {
        let delta = self.interaction.gestures().zoom_units_delta(delta_y);
        let units_per_pixel = self.viewport.zoom_units_per_pixel_at(delta, anchor_px)?;
        self.emit_range_changed();
        Ok(units_per_pixel)
    }
}
