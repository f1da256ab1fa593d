use serde::{Deserialize, Serialize};

use crate::core::{NormalizedRange, ViewSize};
use crate::error::{ChartError, ChartResult};

/// Geometry and input scaling of the overview strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    pub width_px: u32,
    pub height_px: u32,
    /// Multiplier from scroll units to a zoom percent.
    pub zoom_scale: f64,
    /// Indicator never shrinks below this width so it stays grabbable.
    pub min_indicator_px: f64,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            width_px: 1000,
            height_px: 60,
            zoom_scale: 0.001,
            min_indicator_px: 4.0,
        }
    }
}

impl OverviewConfig {
    pub fn validate(self) -> ChartResult<Self> {
        ViewSize::new(self.width_px, self.height_px).validate()?;
        if !self.zoom_scale.is_finite() || self.zoom_scale <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "overview zoom_scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_indicator_px.is_finite() || self.min_indicator_px < 0.0 {
            return Err(ChartError::InvalidArgument(
                "overview min_indicator_px must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Range indicator rectangle in overview pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewIndicator {
    pub left_px: f64,
    pub width_px: f64,
}

/// Maps the main viewport's normalized range onto the overview strip and
/// overview input back onto range changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewSync {
    config: OverviewConfig,
}

impl OverviewSync {
    pub fn new(config: OverviewConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> OverviewConfig {
        self.config
    }

    #[must_use]
    pub fn size(&self) -> ViewSize {
        ViewSize::new(self.config.width_px, self.config.height_px)
    }

    pub fn resize(&mut self, size: ViewSize) -> ChartResult<()> {
        let size = size.validate()?;
        self.config.width_px = size.width;
        self.config.height_px = size.height;
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self, range: NormalizedRange) -> OverviewIndicator {
        let width = f64::from(self.config.width_px);
        let indicator_width = (range.span() * width)
            .max(self.config.min_indicator_px)
            .min(width);
        let left = (range.min() * width).min(width - indicator_width).max(0.0);
        OverviewIndicator {
            left_px: left,
            width_px: indicator_width,
        }
    }

    /// Indicator drag distance as a fraction of the full domain.
    #[must_use]
    pub fn drag_delta_to_fraction(&self, delta_px: f64) -> f64 {
        delta_px / f64::from(self.config.width_px)
    }

    /// Scroll distance as a zoom percent in `[-1, 1]`.
    #[must_use]
    pub fn scroll_delta_to_zoom(&self, delta: f64) -> f64 {
        (delta * self.config.zoom_scale).clamp(-1.0, 1.0)
    }
}
