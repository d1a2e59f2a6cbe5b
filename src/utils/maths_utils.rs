use argminmax::ArgMinMax;
use std::f64;

/// (min, max) of a slice, `None` when empty.
#[inline]
pub(crate) fn min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index): (usize, usize) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// Pads `(min, max)` by `pad_pct` of its span on both sides; flat ranges get `min_span`.
pub(crate) fn padded_range(min: f64, max: f64, pad_pct: f64, min_span: f64) -> (f64, f64) {
    let span = (max - min).max(min_span);
    let pad = span * pad_pct;
    let mid = (min + max) / 2.0;
    let half = span / 2.0 + pad;
    (mid - half, mid + half)
}

#[inline]
pub(crate) fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}
