//! Sparse-table range min/max index.
//!
//! Level `j` stores, for every start index `i` with `i + 2^j <= n`, the
//! aggregate over `values[i ..= i + 2^j - 1]`. A query over `[l, r]` combines
//! the two (possibly overlapping) windows of length `2^floor(log2(r - l + 1))`
//! anchored at `l` and ending at `r`. Overlap is harmless because min and max
//! are idempotent.

use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::error::{ChartError, ChartResult};

/// Idempotent aggregate answered by [`RangeIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeAggregate {
    Min,
    Max,
}

impl RangeAggregate {
    #[must_use]
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min => a.min(b),
            Self::Max => a.max(b),
        }
    }
}

/// O(1) range min/max queries after O(n log n) preprocessing.
///
/// Values must be finite; [`crate::core::Series`] enforces that before
/// building its indexes.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeIndex {
    logs: Vec<usize>,
    min_levels: Vec<Vec<f64>>,
    max_levels: Vec<Vec<f64>>,
}

impl RangeIndex {
    pub fn build(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidArgument(
                "range index requires at least one value".to_owned(),
            ));
        }

        let logs = precompute_logs(values.len());
        let level_count = logs[values.len()] + 1;

        Ok(Self {
            min_levels: build_levels(values, level_count, RangeAggregate::Min),
            max_levels: build_levels(values, level_count, RangeAggregate::Max),
            logs,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.min_levels[0].len()
    }

    /// Always `false`: empty input is rejected by [`RangeIndex::build`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_levels[0].is_empty()
    }

    /// Number of precomputed levels (`floor(log2 n) + 1`).
    #[must_use]
    pub fn levels(&self) -> usize {
        self.min_levels.len()
    }

    /// Aggregate over `values[left ..= right]`.
    pub fn query(&self, aggregate: RangeAggregate, left: usize, right: usize) -> ChartResult<f64> {
        let len = self.len();
        if left > right || right >= len {
            return Err(ChartError::IndexOutOfRange { left, right, len });
        }

        let levels = match aggregate {
            RangeAggregate::Min => &self.min_levels,
            RangeAggregate::Max => &self.max_levels,
        };
        if left == right {
            return Ok(levels[0][left]);
        }

        let level = self.logs[right - left + 1];
        let window = 1_usize << level;
        Ok(aggregate.combine(
            levels[level][left],
            levels[level][right + 1 - window],
        ))
    }

    pub fn min(&self, left: usize, right: usize) -> ChartResult<f64> {
        self.query(RangeAggregate::Min, left, right)
    }

    pub fn max(&self, left: usize, right: usize) -> ChartResult<f64> {
        self.query(RangeAggregate::Max, left, right)
    }

    pub fn min_max(&self, left: usize, right: usize) -> ChartResult<Bounds> {
        Ok(Bounds::new(self.min(left, right)?, self.max(left, right)?))
    }
}

fn precompute_logs(len: usize) -> Vec<usize> {
    let mut logs = vec![0; len + 1];
    for k in 2..=len {
        logs[k] = logs[k / 2] + 1;
    }
    logs
}

fn build_levels(values: &[f64], level_count: usize, aggregate: RangeAggregate) -> Vec<Vec<f64>> {
    let mut levels = Vec::with_capacity(level_count);
    levels.push(values.to_vec());

    for level in 1..level_count {
        let half = 1_usize << (level - 1);
        let window = 1_usize << level;
        let next: Vec<f64> = {
            let prev = &levels[level - 1];
            (0..=values.len() - window)
                .map(|i| aggregate.combine(prev[i], prev[i + half]))
                .collect()
        };
        levels.push(next);
    }

    levels
}
