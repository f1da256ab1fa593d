use serde::{Deserialize, Serialize};

use crate::core::ViewSize;
use crate::error::{ChartError, ChartResult};

const REGION_EPSILON: f64 = 1e-9;

/// Sub-area of the chart as fractions of the full chart size, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRegion {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRegion {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn validate(self, name: &str) -> ChartResult<Self> {
        let fields = [self.left, self.top, self.width, self.height];
        if fields.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ChartError::InvalidArgument(format!(
                "layout region `{name}` fractions must be finite and >= 0"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "layout region `{name}` must have positive width and height"
            )));
        }
        if self.left + self.width > 1.0 + REGION_EPSILON
            || self.top + self.height > 1.0 + REGION_EPSILON
        {
            return Err(ChartError::InvalidArgument(format!(
                "layout region `{name}` must fit inside the chart"
            )));
        }
        Ok(self)
    }

    /// Pixel rectangle, floored like the backend viewport/scissor calls.
    #[must_use]
    pub fn to_pixels(self, size: ViewSize) -> PixelRect {
        let width = f64::from(size.width);
        let height = f64::from(size.height);
        PixelRect {
            x: (width * self.left).floor(),
            y: (height * self.top).floor(),
            width: (width * self.width).floor(),
            height: (height * self.height).floor(),
        }
    }
}

/// Axis-aligned pixel rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub fn size(self) -> ViewSize {
        ViewSize::new(self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Placement of the legend, plot and axis strips inside the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub legend: ViewRegion,
    pub graph: ViewRegion,
    pub x_axis: ViewRegion,
    pub y_axis: ViewRegion,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            legend: ViewRegion::new(0.0, 0.0, 1.0, 0.15),
            graph: ViewRegion::new(0.1, 0.15, 0.9, 0.6),
            x_axis: ViewRegion::new(0.1, 0.75, 0.9, 0.25),
            y_axis: ViewRegion::new(0.0, 0.15, 0.1, 0.6),
        }
    }
}

impl ChartLayout {
    pub fn validate(self) -> ChartResult<Self> {
        self.legend.validate("legend")?;
        self.graph.validate("graph")?;
        self.x_axis.validate("x_axis")?;
        self.y_axis.validate("y_axis")?;
        Ok(self)
    }

    /// Drawable size handed to the viewport for a given chart size.
    pub fn graph_size(self, chart_size: ViewSize) -> ChartResult<ViewSize> {
        self.graph.to_pixels(chart_size).size().validate()
    }
}
