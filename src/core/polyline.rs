use serde::{Deserialize, Serialize};

use crate::core::index_lookup::SearchMode;
use crate::core::{DataDomain, LinearScale, Sample, Series, ViewSize, Viewport};
use crate::error::ChartResult;

/// Window length (in samples per pixel column) above which projection
/// switches to a per-column min/max envelope.
const DECIMATION_SAMPLES_PER_COLUMN: usize = 2;

/// Output coordinate space of a projected polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolylineSpace {
    /// Pixels from the bottom-left corner of the drawable.
    LocalPixels,
    /// Fractions of the drawable, `(0, 0)` bottom-left and `(1, 1)` top-right.
    Normalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylinePoint {
    pub x: f64,
    pub y: f64,
}

/// Snapshot of a data-to-drawable transform.
///
/// Detached from [`Viewport`] so projection can run without touching the
/// viewport cache (and across threads with `parallel-projection`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    x_origin: f64,
    units_per_pixel: f64,
    y_scale: LinearScale,
    width_px: f64,
    height_px: f64,
}

impl ProjectionFrame {
    pub fn from_viewport(viewport: &Viewport) -> ChartResult<Self> {
        let size = viewport.view_size();
        Ok(Self {
            x_origin: viewport.pixel_to_data_x(0.0)?,
            units_per_pixel: viewport.units_per_pixel(),
            y_scale: viewport.vertical_scale()?,
            width_px: f64::from(size.width),
            height_px: f64::from(size.height),
        })
    }

    /// Fits the whole `domain` into `size`, as the overview strip does.
    pub fn fit(domain: DataDomain, size: ViewSize) -> ChartResult<Self> {
        let size = size.validate()?;
        let width_px = f64::from(size.width);
        let units_per_pixel = if domain.x.span() > 0.0 {
            domain.x.span() / width_px
        } else {
            1.0
        };
        Ok(Self {
            x_origin: domain.x.min,
            units_per_pixel,
            y_scale: LinearScale::from_bounds(domain.y, 1.0)?,
            width_px,
            height_px: f64::from(size.height),
        })
    }

    #[must_use]
    pub fn project(&self, sample: Sample, space: PolylineSpace) -> PolylinePoint {
        self.point(sample.x, sample.y, space)
    }

    fn point(&self, x: f64, y: f64, space: PolylineSpace) -> PolylinePoint {
        let px = (x - self.x_origin) / self.units_per_pixel;
        let py = self.y_scale.to_normalized(y) * self.height_px;
        match space {
            PolylineSpace::LocalPixels => PolylinePoint { x: px, y: py },
            PolylineSpace::Normalized => PolylinePoint {
                x: px / self.width_px,
                y: py / self.height_px,
            },
        }
    }

    fn columns(&self) -> usize {
        self.width_px.max(1.0) as usize
    }

    fn x_end(&self) -> f64 {
        self.x_origin + self.width_px * self.units_per_pixel
    }
}

/// Polyline for the part of `series` inside the viewport's visible window.
///
/// One sample past each edge is kept so segments crossing the border are
/// drawn. Dense windows collapse to a min/max pair per pixel column using the
/// series range index.
pub fn project_visible_polyline(
    series: &Series,
    viewport: &Viewport,
    space: PolylineSpace,
) -> ChartResult<Vec<PolylinePoint>> {
    let frame = ProjectionFrame::from_viewport(viewport)?;
    project_with_frame(series, &frame, space)
}

/// Polyline for the part of `series` covered by `frame`.
pub fn project_with_frame(
    series: &Series,
    frame: &ProjectionFrame,
    space: PolylineSpace,
) -> ChartResult<Vec<PolylinePoint>> {
    let (first, last) = series.index_window(frame.x_origin, frame.x_end())?;
    let window_len = last - first + 1;
    if window_len <= frame.columns() * DECIMATION_SAMPLES_PER_COLUMN {
        return Ok(series.samples()[first..=last]
            .iter()
            .map(|sample| frame.project(*sample, space))
            .collect());
    }
    project_envelope(series, frame, space)
}

fn project_envelope(
    series: &Series,
    frame: &ProjectionFrame,
    space: PolylineSpace,
) -> ChartResult<Vec<PolylinePoint>> {
    let columns = frame.columns();

    #[cfg(feature = "parallel-projection")]
    let envelope: Vec<Option<[PolylinePoint; 2]>> = {
        use rayon::prelude::*;
        (0..columns)
            .into_par_iter()
            .map(|column| column_envelope(series, frame, space, column))
            .collect::<ChartResult<_>>()?
    };

    #[cfg(not(feature = "parallel-projection"))]
    let envelope: Vec<Option<[PolylinePoint; 2]>> = (0..columns)
        .map(|column| column_envelope(series, frame, space, column))
        .collect::<ChartResult<_>>()?;

    Ok(envelope.into_iter().flatten().flatten().collect())
}

fn column_envelope(
    series: &Series,
    frame: &ProjectionFrame,
    space: PolylineSpace,
    column: usize,
) -> ChartResult<Option<[PolylinePoint; 2]>> {
    let column_start = frame.x_origin + column as f64 * frame.units_per_pixel;
    let column_end = column_start + frame.units_per_pixel;

    let samples = series.samples();
    // Floor/Ceil widen to whole runs of equal x; step inward past neighbours
    // that sit outside the column.
    let mut first = series.index_of(column_start, SearchMode::Floor)?;
    if samples[first].x < column_start {
        first += 1;
    }
    let mut last = series.index_of(column_end, SearchMode::Ceil)?;
    if samples[last].x > column_end {
        let Some(inner) = last.checked_sub(1) else {
            return Ok(None);
        };
        last = inner;
    }
    if first >= samples.len() || first > last {
        return Ok(None);
    }

    let bounds = series.windowed_y_bounds(first, last)?;
    let x = column_start + frame.units_per_pixel / 2.0;
    Ok(Some([
        frame.point(x, bounds.min, space),
        frame.point(x, bounds.max, space),
    ]))
}
