use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Color, OverviewConfig, Sample, ViewSize, ViewportConfig};
use crate::error::{ChartError, ChartResult};
use crate::interaction::GestureConfig;

use super::validation::{validate_axis_label_mode, validate_text_style};

/// How axis tick values are turned into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelMode {
    /// Plain number with a fixed number of decimals.
    Decimal { precision: u8 },
    /// Value is a unix timestamp in milliseconds, shown as UTC `HH:MM:SS.mmm`.
    UnixMillis,
}

impl Default for AxisLabelMode {
    fn default() -> Self {
        Self::Decimal { precision: 2 }
    }
}

/// One series handed to [`super::ChartEngine::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    #[serde(default)]
    pub color: Option<Color>,
    pub samples: Vec<Sample>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            color: None,
            samples,
        }
    }

    /// Builds a spec from `[x, y]` pairs.
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: &[[f64; 2]]) -> Self {
        Self::new(name, pairs.iter().copied().map(Sample::from).collect())
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings
/// instead of inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub chart_size: ViewSize,
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default = "default_follow_enabled")]
    pub follow_enabled: bool,
    #[serde(default)]
    pub overview: Option<OverviewConfig>,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub x_axis_labels: AxisLabelMode,
    #[serde(default)]
    pub y_axis_labels: AxisLabelMode,
    /// Charts shorter than this are grown to it; axis labels stop fitting below.
    #[serde(default = "default_min_chart_height_px")]
    pub min_chart_height_px: u32,
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f64,
    /// Fill painted over the whole chart before anything else.
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl ChartEngineConfig {
    /// Creates a config with default layout, scale and styling.
    #[must_use]
    pub fn new(chart_size: ViewSize) -> Self {
        Self {
            chart_size,
            layout: ChartLayout::default(),
            viewport: ViewportConfig::default(),
            follow_enabled: default_follow_enabled(),
            overview: None,
            gestures: GestureConfig::default(),
            x_axis_labels: AxisLabelMode::default(),
            y_axis_labels: AxisLabelMode::default(),
            min_chart_height_px: default_min_chart_height_px(),
            line_thickness: default_line_thickness(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            font_size_px: default_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_follow_enabled(mut self, enabled: bool) -> Self {
        self.follow_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_overview(mut self, overview: OverviewConfig) -> Self {
        self.overview = Some(overview);
        self
    }

    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x: AxisLabelMode, y: AxisLabelMode) -> Self {
        self.x_axis_labels = x;
        self.y_axis_labels = y;
        self
    }

    #[must_use]
    pub fn with_min_chart_height_px(mut self, height_px: u32) -> Self {
        self.min_chart_height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_text_style(mut self, color: Color, font_size_px: f64) -> Self {
        self.text_color = color;
        self.font_size_px = font_size_px;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidArgument(format!("failed to parse engine config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Checks everything except the chart size, which the engine adjusts
    /// against `min_chart_height_px` before validating.
    pub fn validate(self) -> ChartResult<Self> {
        self.layout.validate()?;
        self.viewport.validate()?;
        self.gestures.validate()?;
        if let Some(overview) = self.overview {
            overview.validate()?;
        }
        validate_axis_label_mode(self.x_axis_labels)?;
        validate_axis_label_mode(self.y_axis_labels)?;
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "line thickness must be finite and > 0".to_owned(),
            ));
        }
        self.background_color.validate()?;
        validate_text_style(self.text_color, self.font_size_px)?;
        Ok(self)
    }
}

fn default_follow_enabled() -> bool {
    true
}

fn default_min_chart_height_px() -> u32 {
    200
}

fn default_line_thickness() -> f64 {
    1.0
}

fn default_background_color() -> Color {
    Color::from_hex(0xffffff)
}

fn default_text_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_font_size_px() -> f64 {
    12.0
}
