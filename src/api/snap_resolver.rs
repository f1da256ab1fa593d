use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Sample, SearchMode, Series, SeriesId};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Nearest sample of every series to the current playback position.
    pub fn samples_at_position(&self) -> ChartResult<Vec<(SeriesId, Sample)>> {
        let position = self.cursor.position();
        self.viewport
            .series()
            .iter()
            .map(|(id, series)| Ok((id, nearest_sample(series, position)?)))
            .collect()
    }
}

/// Closest sample by x; ties go to the earlier sample.
pub(super) fn nearest_sample(series: &Series, x: f64) -> ChartResult<Sample> {
    let samples = series.samples();
    let mut candidates: SmallVec<[(OrderedFloat<f64>, Sample); 2]> = SmallVec::new();
    for mode in [SearchMode::Floor, SearchMode::Ceil] {
        let sample = samples[series.index_of(x, mode)?];
        candidates.push((OrderedFloat((sample.x - x).abs()), sample));
    }
    Ok(candidates
        .into_iter()
        .min_by_key(|item| item.0)
        .map_or(samples[0], |(_, sample)| sample))
}
