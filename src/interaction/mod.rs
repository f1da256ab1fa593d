use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Scaling from raw input deltas to viewport operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Camera pixels moved per unit of horizontal pan delta.
    pub pan_scale: f64,
    /// Units-per-pixel change per unit of vertical zoom delta.
    pub zoom_scale: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_scale: 0.1,
            zoom_scale: 0.001,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn with_pan_scale(mut self, pan_scale: f64) -> Self {
        self.pan_scale = pan_scale;
        self
    }

    #[must_use]
    pub fn with_zoom_scale(mut self, zoom_scale: f64) -> Self {
        self.zoom_scale = zoom_scale;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.pan_scale.is_finite() || self.pan_scale <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "gesture pan_scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.zoom_scale.is_finite() || self.zoom_scale <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "gesture zoom_scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Camera delta for a horizontal drag; dragging right moves the camera left.
    #[must_use]
    pub fn pan_camera_delta(self, delta_x: f64) -> f64 {
        -delta_x * self.pan_scale
    }

    /// Units-per-pixel delta for a wheel/pinch step; positive `delta_y` zooms in.
    #[must_use]
    pub fn zoom_units_delta(self, delta_y: f64) -> f64 {
        -delta_y * self.zoom_scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
    gestures: GestureConfig,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            gestures: GestureConfig::default(),
        }
    }
}

impl InteractionState {
    pub fn new(gestures: GestureConfig) -> ChartResult<Self> {
        Ok(Self {
            mode: InteractionMode::Idle,
            gestures: gestures.validate()?,
        })
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn gestures(self) -> GestureConfig {
        self.gestures
    }

    pub fn on_pan_start(&mut self) {
        self.mode = InteractionMode::Panning;
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
