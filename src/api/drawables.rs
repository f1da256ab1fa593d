use crate::core::{
    Color, DataDomain, OverviewIndicator, PixelRect, PolylinePoint, PolylineSpace,
    ProjectionFrame, Sample, Series, ViewSize, project_visible_polyline, project_with_frame,
};
use crate::error::ChartResult;
use crate::render::{
    DrawContext, DrawableWindow, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::AxisLabelMode;
use super::axis_ticks::{
    AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX, axis_tick_target_count, axis_tick_values,
    format_axis_label,
};

const AXIS_TICK_LENGTH_PX: f64 = 5.0;
const AXIS_LABEL_GAP_PX: f64 = 2.0;
const POSITION_INDICATOR_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
const OVERVIEW_BACKGROUND_COLOR: Color = Color::rgb(0.95, 0.95, 0.95);
const OVERVIEW_INDICATOR_COLOR: Color = Color::rgba(0.2, 0.4, 1.0, 0.25);

/// Chart-pixel point for a local drawable point (bottom-left origin).
fn to_chart_point(rect: PixelRect, local: PolylinePoint) -> PolylinePoint {
    PolylinePoint {
        x: rect.x + local.x,
        y: rect.bottom() - local.y,
    }
}

/// Cuts a left-to-right polyline at `left`/`right`, interpolating the
/// crossing segments. Returns fewer than two points when nothing is inside.
fn clip_columns(points: &[PolylinePoint], left: f64, right: f64) -> Vec<PolylinePoint> {
    let mut clipped = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b.x < left || a.x > right {
            continue;
        }
        let start = if a.x < left { lerp_at(a, b, left) } else { a };
        let end = if b.x > right { lerp_at(a, b, right) } else { b };
        if clipped.last() != Some(&start) {
            clipped.push(start);
        }
        clipped.push(end);
    }
    clipped
}

fn lerp_at(a: PolylinePoint, b: PolylinePoint, x: f64) -> PolylinePoint {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return PolylinePoint { x, y: a.y };
    }
    let t = (x - a.x) / dx;
    PolylinePoint {
        x,
        y: a.y + (b.y - a.y) * t,
    }
}

fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

fn contrasting_text_color(background: Color) -> Color {
    let luma = 0.299 * background.red + 0.587 * background.green + 0.114 * background.blue;
    if luma > 0.5 {
        Color::rgb(0.0, 0.0, 0.0)
    } else {
        Color::rgb(1.0, 1.0, 1.0)
    }
}

/// Visible part of every series, one polyline each.
pub(super) struct SeriesLinesView {
    pub rect: PixelRect,
}

impl DrawableWindow for SeriesLinesView {
    fn region(&self) -> PixelRect {
        self.rect
    }

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let series = ctx.viewport.series();
        for (id, entry) in series.iter() {
            let Some(color) = series.resolved_color(id) else {
                continue;
            };
            let local = project_visible_polyline(entry, ctx.viewport, PolylineSpace::LocalPixels)?;
            let clipped = clip_columns(&local, 0.0, self.rect.width);
            if clipped.len() < 2 {
                continue;
            }
            let points = clipped
                .into_iter()
                .map(|point| to_chart_point(self.rect, point))
                .collect();
            frame
                .polylines
                .push(PolylinePrimitive::new(points, ctx.line_thickness, color));
        }
        Ok(())
    }
}

/// Vertical playback line plus the value of each series at that position.
pub(super) struct PositionIndicatorView {
    pub rect: PixelRect,
    pub samples: Vec<(Color, Sample)>,
    pub label_mode: AxisLabelMode,
}

impl DrawableWindow for PositionIndicatorView {
    fn region(&self) -> PixelRect {
        self.rect
    }

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let local_x = ctx.viewport.data_x_to_pixel(ctx.cursor.position())?;
        if !(0.0..=self.rect.width).contains(&local_x) {
            return Ok(());
        }
        let x = self.rect.x + local_x;
        frame.polylines.push(PolylinePrimitive::segment(
            x,
            self.rect.y,
            x,
            self.rect.bottom(),
            ctx.line_thickness,
            POSITION_INDICATOR_COLOR,
        ));

        for (color, sample) in &self.samples {
            let local_y = ctx.viewport.data_y_to_pixel(sample.y)?;
            if !(0.0..=self.rect.height).contains(&local_y) {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                format_axis_label(sample.y, self.label_mode),
                x + AXIS_LABEL_GAP_PX,
                self.rect.bottom() - local_y,
                ctx.font_size_px,
                *color,
                TextHAlign::Left,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AxisOrientation {
    /// Below the plot, labels the visible x window.
    Horizontal,
    /// Left of the plot, labels the y window mapped onto the plot height.
    Vertical,
}

pub(super) struct AxisView {
    pub rect: PixelRect,
    pub orientation: AxisOrientation,
    pub label_mode: AxisLabelMode,
}

impl AxisView {
    fn append_horizontal(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let rect = self.rect;
        frame.polylines.push(PolylinePrimitive::segment(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y,
            ctx.line_thickness,
            ctx.text_color,
        ));

        let bounds = ctx.viewport.visible_range()?.x;
        let count = axis_tick_target_count(rect.width, AXIS_X_TARGET_SPACING_PX);
        for value in axis_tick_values(bounds, count) {
            let x = rect.x + ctx.viewport.data_x_to_pixel(value)?;
            frame.polylines.push(PolylinePrimitive::segment(
                x,
                rect.y,
                x,
                rect.y + AXIS_TICK_LENGTH_PX,
                ctx.line_thickness,
                ctx.text_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_axis_label(value, self.label_mode),
                x,
                rect.y + AXIS_TICK_LENGTH_PX + AXIS_LABEL_GAP_PX + ctx.font_size_px,
                ctx.font_size_px,
                ctx.text_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn append_vertical(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let rect = self.rect;
        let right = rect.x + rect.width;
        frame.polylines.push(PolylinePrimitive::segment(
            right,
            rect.y,
            right,
            rect.bottom(),
            ctx.line_thickness,
            ctx.text_color,
        ));

        let bounds = ctx.viewport.vertical_window()?;
        let count = axis_tick_target_count(rect.height, AXIS_Y_TARGET_SPACING_PX);
        for value in axis_tick_values(bounds, count) {
            let y = rect.bottom() - ctx.viewport.data_y_to_pixel(value)?;
            frame.polylines.push(PolylinePrimitive::segment(
                right - AXIS_TICK_LENGTH_PX,
                y,
                right,
                y,
                ctx.line_thickness,
                ctx.text_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_axis_label(value, self.label_mode),
                right - AXIS_TICK_LENGTH_PX - AXIS_LABEL_GAP_PX,
                y + ctx.font_size_px / 2.0,
                ctx.font_size_px,
                ctx.text_color,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }
}

impl DrawableWindow for AxisView {
    fn region(&self) -> PixelRect {
        self.rect
    }

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        match self.orientation {
            AxisOrientation::Horizontal => self.append_horizontal(ctx, frame),
            AxisOrientation::Vertical => self.append_vertical(ctx, frame),
        }
    }
}

/// Equal-width colored cells, one per series, with the name centred in each.
pub(super) struct LegendView {
    pub rect: PixelRect,
    pub entries: Vec<(String, Color)>,
}

impl DrawableWindow for LegendView {
    fn region(&self) -> PixelRect {
        self.rect
    }

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let cell_width = self.rect.width / self.entries.len() as f64;
        let text_y = self.rect.y + (self.rect.height + ctx.font_size_px) / 2.0;
        for (index, (name, color)) in self.entries.iter().enumerate() {
            let left = self.rect.x + index as f64 * cell_width;
            frame.rects.push(RectPrimitive::new(
                left,
                self.rect.y,
                cell_width,
                self.rect.height,
                *color,
            ));
            if name.is_empty() || estimate_text_width_px(name, ctx.font_size_px) > cell_width {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                name.clone(),
                left + cell_width / 2.0,
                text_y,
                ctx.font_size_px,
                contrasting_text_color(*color),
                TextHAlign::Center,
            ));
        }
        Ok(())
    }
}

/// Whole-domain preview with the main window's range indicator on top.
pub(super) struct OverviewView<'a> {
    pub size: ViewSize,
    pub domain: DataDomain,
    pub series: Vec<(&'a Series, Color)>,
    pub indicator: OverviewIndicator,
}

impl DrawableWindow for OverviewView<'_> {
    fn region(&self) -> PixelRect {
        PixelRect {
            x: 0.0,
            y: 0.0,
            width: f64::from(self.size.width),
            height: f64::from(self.size.height),
        }
    }

    fn append_primitives(&self, ctx: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let rect = self.region();
        frame.rects.push(RectPrimitive::new(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            OVERVIEW_BACKGROUND_COLOR,
        ));

        let projection = ProjectionFrame::fit(self.domain, self.size)?;
        for (series, color) in &self.series {
            let local = project_with_frame(series, &projection, PolylineSpace::LocalPixels)?;
            if local.len() < 2 {
                continue;
            }
            let points = local
                .into_iter()
                .map(|point| to_chart_point(rect, point))
                .collect();
            frame
                .polylines
                .push(PolylinePrimitive::new(points, ctx.line_thickness, *color));
        }

        frame.rects.push(RectPrimitive::new(
            self.indicator.left_px,
            rect.y,
            self.indicator.width_px,
            rect.height,
            OVERVIEW_INDICATOR_COLOR,
        ));
        Ok(())
    }
}
