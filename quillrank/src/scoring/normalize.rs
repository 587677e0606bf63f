//! Min-max rescaling of raw score components
//!
//! Each signal (BM25, reranker, vector) reports on its own scale, so raw
//! values are rescaled into [0, 1] per component across the current result
//! set before fusion. A degenerate range (single candidate, or all
//! candidates tied) falls back to unit bounds, so uniform values pass
//! through unchanged instead of dividing by zero or collapsing a
//! legitimate tie to the range minimum.

/// An inclusive (min, max) range over one score component
pub type Bounds = (f64, f64);

const RANGE_EPSILON: f64 = 1e-9;

fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= RANGE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Compute the (min, max) bounds of a component across all candidates.
///
/// Empty or degenerate inputs yield `(0.0, 1.0)` so that [`normalize`]
/// stays total.
pub fn min_max(values: &[f64]) -> Bounds {
    let Some(first) = values.first() else {
        return (0.0, 1.0);
    };

    let (mut vmin, mut vmax) = (*first, *first);
    for &v in &values[1..] {
        vmin = vmin.min(v);
        vmax = vmax.max(v);
    }

    if nearly_equal(vmin, vmax) {
        (0.0, 1.0)
    } else {
        (vmin, vmax)
    }
}

/// Rescale one value against the given bounds.
///
/// Degenerate bounds map every value to 1.0; [`min_max`] never produces
/// such bounds, so this only triggers for caller-supplied ranges.
pub fn normalize(value: f64, bounds: Bounds) -> f64 {
    let (vmin, vmax) = bounds;
    if nearly_equal(vmin, vmax) {
        return 1.0;
    }
    (value - vmin) / (vmax - vmin)
}
