//! Camera window over a set of series sharing one x-domain.
//!
//! `camera_x` is a pixel offset from the domain start at the current scale:
//! the left edge of the drawable shows `domain.x.min + camera_x * units_per_pixel`
//! and the right edge `left + view_width * units_per_pixel`.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    Bounds, DataDomain, LinearScale, NormalizedRange, Sample, Series, SeriesCollection, SeriesId,
    ViewSize, VisibleRange,
};
use crate::error::{ChartError, ChartResult};

/// Scale and auto-zoom settings, validated once by [`Viewport::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub initial_units_per_pixel: f64,
    /// Floor for `units_per_pixel`; keeps extreme zoom-in from inverting the scale.
    pub min_units_per_pixel: f64,
    /// Fit the y-axis to the data inside the visible x window.
    pub vertical_auto_zoom: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_units_per_pixel: 1.0,
            min_units_per_pixel: 1e-6,
            vertical_auto_zoom: true,
        }
    }
}

impl ViewportConfig {
    #[must_use]
    pub fn with_initial_units_per_pixel(mut self, units_per_pixel: f64) -> Self {
        self.initial_units_per_pixel = units_per_pixel;
        self
    }

    #[must_use]
    pub fn with_min_units_per_pixel(mut self, units_per_pixel: f64) -> Self {
        self.min_units_per_pixel = units_per_pixel;
        self
    }

    #[must_use]
    pub fn with_vertical_auto_zoom(mut self, enabled: bool) -> Self {
        self.vertical_auto_zoom = enabled;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_units_per_pixel.is_finite() || self.min_units_per_pixel <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "viewport min_units_per_pixel must be finite and > 0".to_owned(),
            ));
        }
        if !self.initial_units_per_pixel.is_finite()
            || self.initial_units_per_pixel < self.min_units_per_pixel
        {
            return Err(ChartError::InvalidArgument(
                "viewport initial_units_per_pixel must be finite and >= min_units_per_pixel"
                    .to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RangeCache {
    Stale,
    Fresh(VisibleRange),
}

/// Pan/zoom state for one drawable area.
///
/// Every setter recomputes derived fields before returning, so no caller can
/// observe a half-updated camera. The visible-range cache lives in a `Cell`,
/// which makes the type `!Sync`; multi-threaded hosts guard the owning chart
/// with a single mutex.
#[derive(Debug, Clone)]
pub struct Viewport {
    config: ViewportConfig,
    view_size: ViewSize,
    series: SeriesCollection,
    domain: Option<DataDomain>,
    units_per_pixel: f64,
    camera_x: f64,
    vertical_zoom: f64,
    vertical_window: Option<Bounds>,
    range_cache: Cell<RangeCache>,
}

impl Viewport {
    pub fn new(view_size: ViewSize, config: ViewportConfig) -> ChartResult<Self> {
        let view_size = view_size.validate()?;
        let config = config.validate()?;
        debug!(
            width = view_size.width,
            height = view_size.height,
            units_per_pixel = config.initial_units_per_pixel,
            "create viewport"
        );

        Ok(Self {
            config,
            view_size,
            series: SeriesCollection::default(),
            domain: None,
            units_per_pixel: config.initial_units_per_pixel,
            camera_x: 0.0,
            vertical_zoom: 1.0,
            vertical_window: None,
            range_cache: Cell::new(RangeCache::Stale),
        })
    }

    /// Adds a series and widens the shared domain.
    pub fn attach_series(&mut self, series: Series) -> ChartResult<SeriesId> {
        debug!(name = series.name(), samples = series.len(), "attach series");
        let id = self.series.insert(series);
        self.domain = self.series.domain();
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()?;
        Ok(id)
    }

    #[must_use]
    pub fn series(&self) -> &SeriesCollection {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    #[must_use]
    pub fn view_size(&self) -> ViewSize {
        self.view_size
    }

    #[must_use]
    pub fn units_per_pixel(&self) -> f64 {
        self.units_per_pixel
    }

    #[must_use]
    pub fn camera_x(&self) -> f64 {
        self.camera_x
    }

    /// `full y span / visible y span`, always `>= 1`.
    #[must_use]
    pub fn vertical_zoom(&self) -> f64 {
        self.vertical_zoom
    }

    /// Data-unit y interval currently mapped onto the drawable height.
    pub fn vertical_window(&self) -> ChartResult<Bounds> {
        let domain = self.domain()?;
        Ok(self.vertical_window.unwrap_or(domain.y))
    }

    pub fn domain(&self) -> ChartResult<DataDomain> {
        self.domain.ok_or_else(|| {
            ChartError::PreconditionViolation(
                "viewport has no attached series; attach one before querying ranges".to_owned(),
            )
        })
    }

    /// Shows the fraction `[range_min, range_max]` of the full x-domain.
    ///
    /// Finite out-of-range input is clamped into `[0, 1]` (and reversed
    /// bounds swapped) with a warning. A window narrower than
    /// `min_units_per_pixel` allows is widened to that floor.
    pub fn set_visible_range(
        &mut self,
        range_min: f64,
        range_max: f64,
    ) -> ChartResult<NormalizedRange> {
        let domain = self.domain()?;
        let (range, clamped) = NormalizedRange::clamped(range_min, range_max)?;
        if clamped {
            warn!(
                requested_min = range_min,
                requested_max = range_max,
                applied_min = range.min(),
                applied_max = range.max(),
                "visible range clamped into [0, 1]"
            );
        }

        let span = domain.x.span();
        let data_min = domain.x.min + range.min() * span;
        let data_max = domain.x.min + range.max() * span;
        let mut units_per_pixel = (data_max - data_min) / self.width_px();
        if units_per_pixel < self.config.min_units_per_pixel {
            debug!(
                units_per_pixel,
                floor = self.config.min_units_per_pixel,
                "visible range narrower than scale floor"
            );
            units_per_pixel = self.config.min_units_per_pixel;
        }

        self.units_per_pixel = units_per_pixel;
        self.camera_x = (data_min - domain.x.min) / units_per_pixel;
        trace!(
            units_per_pixel = self.units_per_pixel,
            camera_x = self.camera_x,
            "set visible range"
        );
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()?;
        Ok(range)
    }

    /// Current x window as fractions of the domain, clamped into `[0, 1]`.
    pub fn normalized_range(&self) -> ChartResult<NormalizedRange> {
        let domain = self.domain()?;
        let span = domain.x.span();
        if span <= 0.0 {
            return Ok(NormalizedRange::default());
        }
        let window = self.visible_x(domain);
        let (range, _) = NormalizedRange::clamped(
            (window.min - domain.x.min) / span,
            (window.max - domain.x.min) / span,
        )?;
        Ok(range)
    }

    /// Visible window in data units on both axes.
    ///
    /// `x` comes straight from the camera; `y` is the min/max over every
    /// series inside the index window bounding `x`. The result is cached
    /// until the next mutation.
    pub fn visible_range(&self) -> ChartResult<VisibleRange> {
        if let RangeCache::Fresh(range) = self.range_cache.get() {
            return Ok(range);
        }
        let range = self.compute_visible_range()?;
        self.range_cache.set(RangeCache::Fresh(range));
        Ok(range)
    }

    #[must_use]
    pub fn is_range_cache_fresh(&self) -> bool {
        matches!(self.range_cache.get(), RangeCache::Fresh(_))
    }

    /// Adds `delta` to `units_per_pixel`, clamped at the configured floor.
    ///
    /// `camera_x` is kept as is; use [`Viewport::zoom_units_per_pixel_at`]
    /// for cursor-anchored zoom.
    pub fn add_units_per_pixel(&mut self, delta: f64) -> ChartResult<f64> {
        if !delta.is_finite() {
            return Err(ChartError::InvalidArgument(
                "units-per-pixel delta must be finite".to_owned(),
            ));
        }
        self.apply_units_per_pixel(self.units_per_pixel + delta);
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()?;
        Ok(self.units_per_pixel)
    }

    /// Cursor-anchored zoom: the data x under `anchor_px` stays under it.
    pub fn zoom_units_per_pixel_at(&mut self, delta: f64, anchor_px: f64) -> ChartResult<f64> {
        if !delta.is_finite() || !anchor_px.is_finite() {
            return Err(ChartError::InvalidArgument(
                "zoom delta and anchor must be finite".to_owned(),
            ));
        }
        let domain = self.domain()?;
        let anchor_x = self.pixel_to_data_x(anchor_px)?;
        self.apply_units_per_pixel(self.units_per_pixel + delta);
        self.camera_x = ((anchor_x - domain.x.min) / self.units_per_pixel - anchor_px).max(0.0);
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()?;
        Ok(self.units_per_pixel)
    }

    /// Pans by `delta_px`; the camera never moves left of the domain start.
    pub fn move_camera(&mut self, delta_px: f64) -> ChartResult<f64> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidArgument(
                "camera delta must be finite".to_owned(),
            ));
        }
        self.camera_x = (self.camera_x + delta_px).max(0.0);
        trace!(camera_x = self.camera_x, "move camera");
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()?;
        Ok(self.camera_x)
    }

    /// Applies a new drawable size.
    ///
    /// Scale, camera position and vertical zoom are preserved, so the left
    /// edge keeps showing the same data x. The caller is responsible for
    /// notifying resize observers.
    pub fn update_view(&mut self, view_size: ViewSize) -> ChartResult<ViewSize> {
        self.view_size = view_size.validate()?;
        debug!(
            width = view_size.width,
            height = view_size.height,
            "update viewport size"
        );
        self.invalidate_range_cache();
        Ok(self.view_size)
    }

    pub fn set_vertical_auto_zoom(&mut self, enabled: bool) -> ChartResult<()> {
        self.config.vertical_auto_zoom = enabled;
        self.invalidate_range_cache();
        self.refresh_vertical_zoom()
    }

    /// Pixel offset of `x` from the left edge of the drawable.
    pub fn data_x_to_pixel(&self, x: f64) -> ChartResult<f64> {
        let domain = self.domain()?;
        Ok((x - domain.x.min) / self.units_per_pixel - self.camera_x)
    }

    pub fn pixel_to_data_x(&self, pixel: f64) -> ChartResult<f64> {
        let domain = self.domain()?;
        Ok(domain.x.min + (self.camera_x + pixel) * self.units_per_pixel)
    }

    /// Pixel offset of `y` from the bottom of the drawable.
    pub fn data_y_to_pixel(&self, y: f64) -> ChartResult<f64> {
        self.vertical_scale()?
            .domain_to_pixel(y, f64::from(self.view_size.height))
    }

    pub fn pixel_to_data_y(&self, pixel: f64) -> ChartResult<f64> {
        self.vertical_scale()?
            .pixel_to_domain(pixel, f64::from(self.view_size.height))
    }

    /// Sample position as fractions of the drawable, `(0, 0)` bottom-left.
    pub fn to_normalized(&self, sample: Sample) -> ChartResult<(f64, f64)> {
        let x = self.data_x_to_pixel(sample.x)? / self.width_px();
        let y = self.data_y_to_pixel(sample.y)? / f64::from(self.view_size.height);
        Ok((x, y))
    }

    pub(crate) fn vertical_scale(&self) -> ChartResult<LinearScale> {
        LinearScale::from_bounds(self.vertical_window()?, 1.0)
    }

    fn width_px(&self) -> f64 {
        f64::from(self.view_size.width)
    }

    fn visible_x(&self, domain: DataDomain) -> Bounds {
        let min = domain.x.min + self.camera_x * self.units_per_pixel;
        Bounds::new(min, min + self.width_px() * self.units_per_pixel)
    }

    fn compute_visible_range(&self) -> ChartResult<VisibleRange> {
        let domain = self.domain()?;
        let x = self.visible_x(domain);

        let mut y: Option<Bounds> = None;
        for (_, series) in self.series.iter() {
            let (first, last) = series.index_window(x.min, x.max)?;
            let window = series.windowed_y_bounds(first, last)?;
            y = Some(y.map_or(window, |acc| acc.union(window)));
        }

        Ok(VisibleRange {
            x,
            y: y.unwrap_or(domain.y),
        })
    }

    fn apply_units_per_pixel(&mut self, units_per_pixel: f64) {
        let floor = self.config.min_units_per_pixel;
        if units_per_pixel < floor {
            trace!(requested = units_per_pixel, floor, "units per pixel clamped");
        }
        self.units_per_pixel = units_per_pixel.max(floor);
    }

    fn invalidate_range_cache(&self) {
        self.range_cache.set(RangeCache::Stale);
    }

    fn refresh_vertical_zoom(&mut self) -> ChartResult<()> {
        let Some(domain) = self.domain else {
            return Ok(());
        };
        if !self.config.vertical_auto_zoom {
            self.vertical_window = Some(domain.y);
            self.vertical_zoom = 1.0;
            return Ok(());
        }

        let window = self.visible_range()?.y;
        if window.span() > 0.0 && domain.y.span() > 0.0 {
            self.vertical_window = Some(window);
            self.vertical_zoom = (domain.y.span() / window.span()).max(1.0);
        } else {
            self.vertical_window = Some(domain.y);
            self.vertical_zoom = 1.0;
        }
        Ok(())
    }
}
