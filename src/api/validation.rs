use crate::core::Color;
use crate::error::{ChartError, ChartResult};

use super::AxisLabelMode;

pub(super) fn validate_axis_label_mode(mode: AxisLabelMode) -> ChartResult<AxisLabelMode> {
    match mode {
        AxisLabelMode::Decimal { precision } => {
            if precision > 12 {
                return Err(ChartError::InvalidArgument(
                    "axis decimal precision must be <= 12".to_owned(),
                ));
            }
        }
        AxisLabelMode::UnixMillis => {}
    }
    Ok(mode)
}

pub(super) fn validate_text_style(color: Color, font_size_px: f64) -> ChartResult<()> {
    color.validate()?;
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ChartError::InvalidArgument(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_zoom_percent(percent: f64) -> ChartResult<f64> {
    if !percent.is_finite() {
        return Err(ChartError::InvalidArgument(
            "zoom percent must be finite".to_owned(),
        ));
    }
    Ok(percent)
}

pub(super) fn validate_range_delta(delta: f64) -> ChartResult<f64> {
    if !delta.is_finite() {
        return Err(ChartError::InvalidArgument(
            "range delta must be finite".to_owned(),
        ));
    }
    Ok(delta)
}
