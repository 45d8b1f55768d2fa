//! Fixed-step time sampling for chart series.

use px_core::{Real, ensure_step};
use tracing::warn;

use crate::error::SimResult;

/// Sampling step (seconds) used for every chart.
pub const DEFAULT_STEP: Real = 0.01;

/// Largest number of samples a single series may hold.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sample times `0, step, 2·step, ...` while `t <= end`.
///
/// Times are accumulated by repeated addition, so the last sample may sit a
/// little below an exact multiple of `step`. A range needing more than
/// [`MAX_SAMPLES`] samples (including an infinite `end`) yields none.
pub fn sample_times(end: Real, step: Real) -> SimResult<Vec<Real>> {
    let step = ensure_step(step, "sample step")?;
    if end.is_infinite() {
        warn!(end, "refusing to sample an unbounded time range");
        return Ok(Vec::new());
    }
    if end / step > MAX_SAMPLES as Real {
        warn!(end, step, max = MAX_SAMPLES, "time range needs too many samples");
        return Ok(Vec::new());
    }

    let mut times = Vec::new();
    let mut current = 0.0;
    while current <= end {
        times.push(current);
        current += step;
    }
    Ok(times)
}

/// Pair each sample time with `f(t)`.
pub fn sample<F>(times: &[Real], f: F) -> Vec<(Real, Real)>
where
    F: Fn(Real) -> Real,
{
    times.iter().map(|&t| (t, f(t))).collect()
}

/// Evaluate an `(x, y)` point at each sample time, dropping the time itself.
pub fn sample_pairs<F>(times: &[Real], f: F) -> Vec<(Real, Real)>
where
    F: Fn(Real) -> (Real, Real),
{
    times.iter().map(|&t| f(t)).collect()
}
