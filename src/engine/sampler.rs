//! Point sampling over the unit square.
//!
//! One batch draws `batch_size` points uniformly from [-1,1]×[-1,1] and
//! classifies each against the inscribed unit circle. Draw order is fixed:
//! per point, `x` is drawn before `y`. The boundary counts as inside, so a
//! point with `x² + y²` exactly 1.0 is a hit.

use crate::engine::rng::RandomSource;
use crate::error::{PiError, PiResult};
use serde::{Deserialize, Serialize};

/// Result of one sampling batch.
///
/// Invariant: `hits <= total` and `total >= 1` (a batch is only produced
/// for a positive batch size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Points inside (or exactly on) the unit circle.
    pub hits: u64,
    /// Points drawn.
    pub total: u64,
}

impl BatchResult {
    /// Fraction of points that landed inside the circle.
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        self.hits as f64 / self.total as f64
    }

    /// π estimate from this batch alone: `4 * hits / total`.
    #[must_use]
    pub fn pi_estimate(&self) -> f64 {
        4.0 * self.hit_ratio()
    }
}

/// Draw `batch_size` points and count how many fall inside the unit circle.
///
/// Consumes exactly `2 * batch_size` uniform draws from `source`, two per
/// point, and nothing else. Deterministic given a deterministic source.
///
/// # Errors
///
/// Returns [`PiError::InvalidBatchSize`] if `batch_size` is zero; no draws
/// are consumed in that case.
pub fn run_batch<R: RandomSource>(batch_size: u64, source: &mut R) -> PiResult<BatchResult> {
    if batch_size == 0 {
        return Err(PiError::InvalidBatchSize { got: batch_size });
    }

    let mut hits = 0;
    for _ in 0..batch_size {
        let x = source.next_range(-1.0, 1.0);
        let y = source.next_range(-1.0, 1.0);
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    Ok(BatchResult {
        hits,
        total: batch_size,
    })
}
