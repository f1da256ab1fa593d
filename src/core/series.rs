use serde::{Deserialize, Serialize};

use crate::core::index_lookup::{SearchMode, search_by};
use crate::core::{Bounds, Color, DataDomain, RangeIndex, Sample};
use crate::error::{ChartError, ChartResult};

const DEFAULT_PALETTE: [u32; 6] = [0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b];

/// Aggregates computed once while validating a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub x_bounds: Bounds,
    pub y_bounds: Bounds,
    /// Mean distance between consecutive x values, `0` for a single sample.
    pub x_avg_delta: f64,
}

/// One named, immutable data track with O(1) windowed min/max lookups.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    color: Option<Color>,
    samples: Vec<Sample>,
    stats: SeriesStats,
    range_index_x: RangeIndex,
    range_index_y: RangeIndex,
}

impl Series {
    /// Validates `samples` and eagerly builds both range indexes.
    ///
    /// Samples must be non-empty, finite and non-decreasing in `x`; they are
    /// never re-sorted.
    pub fn new(
        name: impl Into<String>,
        color: Option<Color>,
        samples: Vec<Sample>,
    ) -> ChartResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidArgument(
                "series name must not be empty".to_owned(),
            ));
        }
        if let Some(color) = color {
            color.validate()?;
        }
        if samples.is_empty() {
            return Err(ChartError::InvalidArgument(format!(
                "series `{name}`: samples must not be empty"
            )));
        }

        let mut xs = Vec::with_capacity(samples.len());
        let mut ys = Vec::with_capacity(samples.len());
        let mut y_bounds = Bounds::new(f64::INFINITY, f64::NEG_INFINITY);
        for (index, sample) in samples.iter().enumerate() {
            if !sample.is_finite() {
                return Err(ChartError::InvalidArgument(format!(
                    "series `{name}`: sample {index} must have finite x and y"
                )));
            }
            if let Some(&prev_x) = xs.last() {
                if sample.x < prev_x {
                    return Err(ChartError::InvalidArgument(format!(
                        "series `{name}`: sample {index} has x={} below previous x={prev_x}; \
                         samples must be non-decreasing in x",
                        sample.x
                    )));
                }
            }
            y_bounds.min = y_bounds.min.min(sample.y);
            y_bounds.max = y_bounds.max.max(sample.y);
            xs.push(sample.x);
            ys.push(sample.y);
        }

        let first_x = xs[0];
        let last_x = xs[xs.len() - 1];
        let x_avg_delta = if xs.len() > 1 {
            (last_x - first_x) / (xs.len() - 1) as f64
        } else {
            0.0
        };

        Ok(Self {
            name,
            color,
            stats: SeriesStats {
                x_bounds: Bounds::new(first_x, last_x),
                y_bounds,
                x_avg_delta,
            },
            range_index_x: RangeIndex::build(&xs)?,
            range_index_y: RangeIndex::build(&ys)?,
            samples,
        })
    }

    /// Builds a series from `[x, y]` pairs.
    pub fn from_pairs(
        name: impl Into<String>,
        color: Option<Color>,
        pairs: &[[f64; 2]],
    ) -> ChartResult<Self> {
        Self::new(name, color, pairs.iter().copied().map(Sample::from).collect())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: empty series are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> SeriesStats {
        self.stats
    }

    #[must_use]
    pub fn range_index_x(&self) -> &RangeIndex {
        &self.range_index_x
    }

    #[must_use]
    pub fn range_index_y(&self) -> &RangeIndex {
        &self.range_index_y
    }

    /// Min/max of `y` over `samples[index_min ..= index_max]`.
    pub fn windowed_y_bounds(&self, index_min: usize, index_max: usize) -> ChartResult<Bounds> {
        self.range_index_y.min_max(index_min, index_max)
    }

    /// Min/max of `x` over `samples[index_min ..= index_max]`.
    pub fn windowed_x_bounds(&self, index_min: usize, index_max: usize) -> ChartResult<Bounds> {
        self.range_index_x.min_max(index_min, index_max)
    }

    /// Index of the sample nearest to `x` using the given tie-break.
    pub fn index_of(&self, x: f64, mode: SearchMode) -> ChartResult<usize> {
        search_by(self.samples.len(), x, mode, |index| self.samples[index].x)
    }

    /// Inclusive index window covering `[x_min, x_max]`.
    ///
    /// The left edge uses `Floor` and the right edge `Ceil`, so the samples
    /// just outside the window (whose segments cross into it) are included.
    /// Both edges clamp into `0..len`.
    pub fn index_window(&self, x_min: f64, x_max: f64) -> ChartResult<(usize, usize)> {
        let (low, high) = if x_min <= x_max {
            (x_min, x_max)
        } else {
            (x_max, x_min)
        };
        let first = self.index_of(low, SearchMode::Floor)?;
        let last = self.index_of(high, SearchMode::Ceil)?;
        Ok((first, last.max(first)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Arena of series sharing one x-domain, addressed by [`SeriesId`].
#[derive(Debug, Clone, Default)]
pub struct SeriesCollection {
    series: Vec<Series>,
}

impl SeriesCollection {
    pub fn insert(&mut self, series: Series) -> SeriesId {
        let id = SeriesId::new(self.series.len() as u32);
        self.series.push(series);
        id
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(id.raw() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.series
            .iter()
            .enumerate()
            .map(|(index, series)| (SeriesId::new(index as u32), series))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Explicit series color or a stable palette entry by insertion order.
    #[must_use]
    pub fn resolved_color(&self, id: SeriesId) -> Option<Color> {
        let series = self.get(id)?;
        Some(series.color().unwrap_or_else(|| {
            Color::from_hex(DEFAULT_PALETTE[id.raw() as usize % DEFAULT_PALETTE.len()])
        }))
    }

    /// Union of x and y bounds across all series, `None` when empty.
    #[must_use]
    pub fn domain(&self) -> Option<DataDomain> {
        let mut iter = self.series.iter().map(Series::stats);
        let first = iter.next()?;
        let initial = DataDomain {
            x: first.x_bounds,
            y: first.y_bounds,
        };
        Some(iter.fold(initial, |domain, stats| DataDomain {
            x: domain.x.union(stats.x_bounds),
            y: domain.y.union(stats.y_bounds),
        }))
    }
}
