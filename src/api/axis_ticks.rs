use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::Bounds;

use super::AxisLabelMode;

pub(super) const AXIS_X_TARGET_SPACING_PX: f64 = 72.0;
pub(super) const AXIS_Y_TARGET_SPACING_PX: f64 = 26.0;
pub(super) const AXIS_MIN_TICKS: usize = 2;
pub(super) const AXIS_MAX_TICKS: usize = 12;

pub(super) type AxisTickValues = SmallVec<[f64; AXIS_MAX_TICKS]>;

pub(super) fn axis_tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(AXIS_MIN_TICKS, AXIS_MAX_TICKS)
}

/// `count` values spread evenly over `bounds`, both ends included.
///
/// A flat range yields a single tick.
pub(super) fn axis_tick_values(bounds: Bounds, count: usize) -> AxisTickValues {
    let mut ticks = AxisTickValues::new();
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return ticks;
    }
    if bounds.span() <= 0.0 || count < 2 {
        ticks.push(bounds.min);
        return ticks;
    }

    let step = bounds.span() / (count - 1) as f64;
    for index in 0..count {
        ticks.push(bounds.min + step * index as f64);
    }
    ticks
}

pub(super) fn format_axis_label(value: f64, mode: AxisLabelMode) -> String {
    match mode {
        AxisLabelMode::Decimal { precision } => {
            format!("{value:.prec$}", prec = usize::from(precision))
        }
        AxisLabelMode::UnixMillis => {
            match DateTime::<Utc>::from_timestamp_millis(value.round() as i64) {
                Some(time) => time.format("%H:%M:%S%.3f").to_string(),
                None => format!("{value:.0}"),
            }
        }
    }
}
