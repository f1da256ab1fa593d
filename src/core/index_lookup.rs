use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tie-break used when the target falls strictly between two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Nearest key `<= target`.
    Floor,
    /// Nearest key `>= target`.
    Ceil,
}

/// Maps `target` to an index of the sorted `keys`.
///
/// - exact matches win regardless of mode (with duplicates, `Floor` returns the
///   first equal key and `Ceil` the last one);
/// - targets below `keys[0]` resolve to `0`, targets above the last key
///   resolve to `len - 1`.
pub fn search(keys: &[f64], target: f64, mode: SearchMode) -> ChartResult<usize> {
    search_by(keys.len(), target, mode, |index| keys[index])
}

/// [`search`] over keys produced by an accessor, for callers that keep keys
/// inside larger records.
pub fn search_by<F>(len: usize, target: f64, mode: SearchMode, key_at: F) -> ChartResult<usize>
where
    F: Fn(usize) -> f64,
{
    if len == 0 {
        return Err(ChartError::InvalidArgument(
            "index lookup requires at least one key".to_owned(),
        ));
    }
    if target.is_nan() {
        return Err(ChartError::InvalidArgument(
            "index lookup target must not be NaN".to_owned(),
        ));
    }

    let last = len - 1;
    if target < key_at(0) {
        return Ok(0);
    }
    if target > key_at(last) {
        return Ok(last);
    }

    let lower = partition(len, |index| key_at(index) < target);
    if lower < len && key_at(lower) == target {
        return Ok(match mode {
            SearchMode::Floor => lower,
            SearchMode::Ceil => partition(len, |index| key_at(index) <= target) - 1,
        });
    }

    // Bounds were handled above, so `0 < lower < len` here.
    Ok(match mode {
        SearchMode::Floor => lower - 1,
        SearchMode::Ceil => lower,
    })
}

/// First index in `0..len` for which `pred` is false, assuming `pred` is
/// true for a prefix and false afterwards.
fn partition<P>(len: usize, pred: P) -> usize
where
    P: Fn(usize) -> bool,
{
    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if pred(mid) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}
