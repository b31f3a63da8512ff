//! Chunked π estimation.
//!
//! A large sample request is filled by repeated sampler calls of at most
//! [`CHUNK_SIZE`] points each; the final call is sized to land exactly on
//! the requested total, never overshooting. Chunk boundaries never reorder
//! the per-sample draws, so for a given source the estimate depends only on
//! the seed and the sample count.
//!
//! # Convergence
//!
//! By the Central Limit Theorem the estimator converges at O(n^{-1/2}):
//! the standard error of `4 * hits / total` is `4·sqrt(p(1-p)/n)` with
//! p = π/4.

use crate::engine::rng::RandomSource;
use crate::engine::sampler::run_batch;
use crate::error::{PiError, PiResult};
use serde::{Deserialize, Serialize};

/// Samples drawn per sampler call when filling a large request.
///
/// Bounds the memory and latency of any single call; callers relying on
/// exact draw positions should note each chunk consumes two draws per
/// point, batch by batch, with no reordering.
pub const CHUNK_SIZE: u64 = 10_000;

/// Summary statistics for one estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSummary {
    /// Point estimate of π.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of samples used.
    pub samples: u64,
    /// 95% confidence interval (estimate ± 1.96 · `std_error`).
    pub confidence_interval: (f64, f64),
}

impl EstimateSummary {
    /// Build a summary from cumulative hit counts.
    #[must_use]
    pub fn new(hits: u64, total: u64) -> Self {
        let p = hits as f64 / total as f64;
        let estimate = 4.0 * p;
        let std_error = 4.0 * (p * (1.0 - p) / total as f64).sqrt();
        let ci_half = 1.96 * std_error;
        Self {
            estimate,
            std_error,
            samples: total,
            confidence_interval: (estimate - ci_half, estimate + ci_half),
        }
    }

    /// Check if a value is within the confidence interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.confidence_interval.0 && value <= self.confidence_interval.1
    }
}

/// Estimate π from `num_samples` uniform points.
///
/// Partitions the request into sequential batches of at most [`CHUNK_SIZE`]
/// points, accumulates hits across them, and returns `4 * hits / total`.
///
/// # Errors
///
/// Returns [`PiError::InvalidSampleCount`] if `num_samples` is zero; no
/// draws are consumed in that case.
pub fn estimate_pi<R: RandomSource>(num_samples: u64, source: &mut R) -> PiResult<f64> {
    estimate_pi_detailed(num_samples, source).map(|summary| summary.estimate)
}

/// Estimate π and report summary statistics.
///
/// Consumes the same draw sequence as [`estimate_pi`] and produces the
/// identical point estimate.
///
/// # Errors
///
/// Returns [`PiError::InvalidSampleCount`] if `num_samples` is zero.
pub fn estimate_pi_detailed<R: RandomSource>(
    num_samples: u64,
    source: &mut R,
) -> PiResult<EstimateSummary> {
    if num_samples == 0 {
        return Err(PiError::InvalidSampleCount { got: num_samples });
    }

    let mut hits = 0;
    let mut total = 0;
    while total < num_samples {
        let batch_size = CHUNK_SIZE.min(num_samples - total);
        let batch = run_batch(batch_size, source)?;
        hits += batch.hits;
        total += batch.total;
    }

    Ok(EstimateSummary::new(hits, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::PiRng;

    #[test]
    fn test_zero_samples_rejected() {
        let mut rng = PiRng::new(42);
        let err = estimate_pi(0, &mut rng).unwrap_err();
        assert!(matches!(err, PiError::InvalidSampleCount { got: 0 }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_estimate_in_range() {
        let mut rng = PiRng::new(42);
        let estimate = estimate_pi(1000, &mut rng).unwrap();
        assert!((0.0..=4.0).contains(&estimate));
    }

    #[test]
    fn test_estimate_close_to_pi() {
        let mut rng = PiRng::new(1);
        let estimate = estimate_pi(50_000, &mut rng).unwrap();
        let relative = (estimate - std::f64::consts::PI).abs() / std::f64::consts::PI;
        assert!(relative < 0.02, "Estimate {estimate} off by {relative:.4}");
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = PiRng::new(42);
        let mut rng2 = PiRng::new(42);

        let e1 = estimate_pi(25_000, &mut rng1).unwrap();
        let e2 = estimate_pi(25_000, &mut rng2).unwrap();

        assert_eq!(e1.to_bits(), e2.to_bits(), "Same seed must reproduce bit-for-bit");
    }

    #[test]
    fn test_exact_fill_non_divisible() {
        // 25_001 samples: chunks of 10_000, 10_000, 5_001.
        let mut rng = PiRng::new(42);
        let summary = estimate_pi_detailed(25_001, &mut rng).unwrap();
        assert_eq!(summary.samples, 25_001);
    }

    #[test]
    fn test_exact_fill_small_request() {
        let mut rng = PiRng::new(42);
        let summary = estimate_pi_detailed(10, &mut rng).unwrap();
        assert_eq!(summary.samples, 10);
    }

    /// Any partition of the same draw sequence yields the same cumulative
    /// counts, hence the identical estimate.
    #[test]
    fn test_chunked_vs_manual_partition() {
        let mut chunked = PiRng::new(42);
        let estimate = estimate_pi(25_000, &mut chunked).unwrap();

        let mut manual = PiRng::new(42);
        let mut hits = 0;
        let mut total = 0;
        for batch_size in [7_000u64, 3_000, 12_000, 3_000] {
            let batch = run_batch(batch_size, &mut manual).unwrap();
            hits += batch.hits;
            total += batch.total;
        }

        let manual_estimate = 4.0 * (hits as f64 / total as f64);
        assert_eq!(
            estimate.to_bits(),
            manual_estimate.to_bits(),
            "Chunking must not change the result"
        );
    }

    #[test]
    fn test_detailed_matches_plain_estimate() {
        let mut rng1 = PiRng::new(7);
        let mut rng2 = PiRng::new(7);

        let plain = estimate_pi(12_345, &mut rng1).unwrap();
        let detailed = estimate_pi_detailed(12_345, &mut rng2).unwrap();

        assert_eq!(plain.to_bits(), detailed.estimate.to_bits());
    }

    #[test]
    fn test_summary_confidence_interval() {
        let summary = EstimateSummary::new(785, 1000);
        assert!((summary.estimate - 3.14).abs() < 1e-12);
        assert!(summary.std_error > 0.0);
        assert!(summary.contains(summary.estimate));
        assert!(summary.confidence_interval.0 < summary.confidence_interval.1);
    }

    #[test]
    fn test_summary_contains() {
        let summary = EstimateSummary::new(785, 1000);
        assert!(!summary.contains(0.0));
        assert!(!summary.contains(4.0));
    }

    #[test]
    fn test_summary_all_hits_zero_error() {
        // p = 1 means zero sampling variance.
        let summary = EstimateSummary::new(100, 100);
        assert!((summary.estimate - 4.0).abs() < f64::EPSILON);
        assert!(summary.std_error.abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = EstimateSummary::new(785, 1000);
        let json = serde_json::to_string(&summary).expect("serialize");
        assert!(json.contains("estimate"));

        let restored: EstimateSummary = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.samples, summary.samples);
    }

    #[test]
    fn test_standard_error_shrinks_with_samples() {
        let mut rng1 = PiRng::new(42);
        let mut rng2 = PiRng::new(42);

        let small = estimate_pi_detailed(1_000, &mut rng1).unwrap();
        let large = estimate_pi_detailed(100_000, &mut rng2).unwrap();

        // SE scales as 1/sqrt(n); 100x samples should shrink it ~10x.
        assert!(
            large.std_error < small.std_error,
            "SE should decrease with sample count"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::PiRng;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: estimate is bounded for any seed and count.
        #[test]
        fn prop_estimate_bounded(seed in 0u64..u64::MAX, num_samples in 1u64..5000) {
            let mut rng = PiRng::new(seed);
            let estimate = estimate_pi(num_samples, &mut rng).unwrap();
            prop_assert!((0.0..=4.0).contains(&estimate));
        }

        /// Falsification test: the request is always filled exactly.
        #[test]
        fn prop_exact_fill(seed in 0u64..u64::MAX, num_samples in 1u64..50_000) {
            let mut rng = PiRng::new(seed);
            let summary = estimate_pi_detailed(num_samples, &mut rng).unwrap();
            prop_assert_eq!(summary.samples, num_samples);
        }

        /// Falsification test: same seed reproduces for any sample count.
        #[test]
        fn prop_reproducible(seed in 0u64..u64::MAX, num_samples in 1u64..5000) {
            let mut rng1 = PiRng::new(seed);
            let mut rng2 = PiRng::new(seed);

            let e1 = estimate_pi(num_samples, &mut rng1).unwrap();
            let e2 = estimate_pi(num_samples, &mut rng2).unwrap();

            prop_assert_eq!(e1.to_bits(), e2.to_bits());
        }
    }
}
