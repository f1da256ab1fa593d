use crate::core::Color;
use crate::error::ChartResult;
use crate::render::{DrawContext, DrawableWindow, RectPrimitive, RenderFrame, Renderer};

use super::ChartEngine;
use super::drawables::{
    AxisOrientation, AxisView, LegendView, OverviewView, PositionIndicatorView, SeriesLinesView,
};

impl<R: Renderer> ChartEngine<R> {
    fn draw_context(&self) -> DrawContext<'_> {
        DrawContext {
            chart_size: self.chart_size,
            viewport: &self.viewport,
            cursor: self.cursor,
            line_thickness: self.config.line_thickness,
            text_color: self.config.text_color,
            font_size_px: self.config.font_size_px,
        }
    }

    fn series_colors(&self) -> Vec<(String, Color)> {
        let series = self.viewport.series();
        series
            .iter()
            .filter_map(|(id, entry)| {
                series
                    .resolved_color(id)
                    .map(|color| (entry.name().to_owned(), color))
            })
            .collect()
    }

    /// Materializes backend-agnostic primitives for the main chart.
    ///
    /// The background fill comes first. Before any series is attached only the
    /// (empty) legend follows it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let ctx = self.draw_context();
        let layout = self.config.layout;
        let mut frame = RenderFrame::new(self.chart_size).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(self.chart_size.width),
            f64::from(self.chart_size.height),
            self.config.background_color,
        ));

        let legend = LegendView {
            rect: layout.legend.to_pixels(self.chart_size),
            entries: self.series_colors(),
        };
        legend.append_primitives(&ctx, &mut frame)?;
        if self.viewport.series().is_empty() {
            return Ok(frame);
        }

        let graph = layout.graph.to_pixels(self.chart_size);
        let series = self.viewport.series();
        let samples = self
            .samples_at_position()?
            .into_iter()
            .filter_map(|(id, sample)| series.resolved_color(id).map(|color| (color, sample)))
            .collect();

        let lines = SeriesLinesView { rect: graph };
        let x_axis = AxisView {
            rect: layout.x_axis.to_pixels(self.chart_size),
            orientation: AxisOrientation::Horizontal,
            label_mode: self.config.x_axis_labels,
        };
        let y_axis = AxisView {
            rect: layout.y_axis.to_pixels(self.chart_size),
            orientation: AxisOrientation::Vertical,
            label_mode: self.config.y_axis_labels,
        };
        let indicator = PositionIndicatorView {
            rect: graph,
            samples,
            label_mode: self.config.y_axis_labels,
        };

        let windows: [&dyn DrawableWindow; 4] = [&lines, &x_axis, &y_axis, &indicator];
        for window in windows {
            if window.region().size().is_valid() {
                window.append_primitives(&ctx, &mut frame)?;
            }
        }
        Ok(frame)
    }

    /// Frame for the overview strip, `None` when the chart has no overview
    /// or no data yet.
    pub fn build_overview_frame(&self) -> ChartResult<Option<RenderFrame>> {
        let Some(overview) = self.overview.as_ref() else {
            return Ok(None);
        };
        if self.viewport.series().is_empty() {
            return Ok(None);
        }

        let collection = self.viewport.series();
        let view = OverviewView {
            size: overview.size(),
            domain: self.viewport.domain()?,
            series: collection
                .iter()
                .filter_map(|(id, entry)| collection.resolved_color(id).map(|color| (entry, color)))
                .collect(),
            indicator: overview.indicator(self.viewport.normalized_range()?),
        };
        let mut frame = RenderFrame::new(overview.size());
        view.append_primitives(&self.draw_context(), &mut frame)?;
        Ok(Some(frame))
    }
}
