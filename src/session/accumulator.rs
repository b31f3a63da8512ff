//! Running hit/total accumulation.

use crate::engine::sampler::BatchResult;
use serde::{Deserialize, Serialize};

/// Running cumulative sampling state owned by a driver.
///
/// Grows monotonically under [`Accumulator::record`]; only
/// [`Accumulator::reset`] returns it to empty. Never shared across
/// concurrent accumulations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulator {
    /// Cumulative hit count.
    hits: u64,
    /// Cumulative sample count.
    total: u64,
}

impl Accumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { hits: 0, total: 0 }
    }

    /// Append one batch result.
    pub fn record(&mut self, batch: &BatchResult) {
        self.hits += batch.hits;
        self.total += batch.total;
    }

    /// Cumulative hit count.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Cumulative sample count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whether any samples have been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Current π estimate `4 * hits / total`, or `None` while empty.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        (self.total > 0).then(|| 4.0 * (self.hits as f64 / self.total as f64))
    }

    /// Clear back to (0, 0).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_estimate() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.estimate(), None);
    }

    #[test]
    fn test_record_accumulates() {
        let mut acc = Accumulator::new();
        acc.record(&BatchResult { hits: 8, total: 10 });
        acc.record(&BatchResult { hits: 7, total: 10 });

        assert_eq!(acc.hits(), 15);
        assert_eq!(acc.total(), 20);
        assert!(!acc.is_empty());
    }

    #[test]
    fn test_estimate_formula() {
        let mut acc = Accumulator::new();
        acc.record(&BatchResult {
            hits: 785,
            total: 1000,
        });

        let estimate = acc.estimate().unwrap();
        assert!((estimate - 3.14).abs() < 1e-12);
    }

    #[test]
    fn test_total_never_decreases() {
        let mut acc = Accumulator::new();
        let mut previous = 0;
        for _ in 0..10 {
            acc.record(&BatchResult { hits: 3, total: 5 });
            assert!(acc.total() > previous);
            previous = acc.total();
        }
    }

    #[test]
    fn test_reset_clears() {
        let mut acc = Accumulator::new();
        acc.record(&BatchResult { hits: 8, total: 10 });

        acc.reset();
        assert!(acc.is_empty());
        assert_eq!(acc.hits(), 0);
        assert_eq!(acc.estimate(), None);
    }

    #[test]
    fn test_default_is_empty() {
        let acc = Accumulator::default();
        assert!(acc.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut acc = Accumulator::new();
        acc.record(&BatchResult { hits: 8, total: 10 });

        let json = serde_json::to_string(&acc).expect("serialize");
        let restored: Accumulator = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, acc);
    }
}
