use crate::core::Bounds;
use crate::error::{ChartError, ChartResult};

/// Affine map between a data interval and `[0, 1]` (or a pixel extent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidArgument(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Scale over `bounds`, widening a zero-width interval symmetrically by
    /// `min_span` so flat data still maps to the middle of the extent.
    pub fn from_bounds(bounds: Bounds, min_span: f64) -> ChartResult<Self> {
        if bounds.span() == 0.0 {
            let half = min_span / 2.0;
            return Self::new(bounds.min - half, bounds.max + half);
        }
        Self::new(bounds.min, bounds.max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn to_normalized(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn from_normalized(self, normalized: f64) -> f64 {
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidArgument("value must be finite".to_owned()));
        }
        Ok(self.to_normalized(value) * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidArgument("pixel must be finite".to_owned()));
        }
        Ok(self.from_normalized(pixel / extent_px))
    }
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidArgument(
            "pixel extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
