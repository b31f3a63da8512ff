//! Deterministic random number generation.
//!
//! Implements PCG (Permuted Congruential Generator) behind an injectable
//! source trait, so every sampling call is reproducible under a fixed seed
//! and swappable for a scripted source in tests.
//!
//! # Reproducibility Guarantee
//!
//! Given the same seed, the draw sequence is bitwise-identical across:
//! - Different runs
//! - Different platforms
//! - Different thread counts (via partitioning)

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Injectable provider of uniform random draws.
///
/// The sampler consumes randomness exclusively through this trait. There is
/// no hidden global generator: a caller either supplies a seeded [`PiRng`]
/// or constructs one from process entropy at the call boundary.
pub trait RandomSource {
    /// Generate the next uniform value in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Generate the next uniform value in the given range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "Invalid range: min > max");
        min + (max - min) * self.next_f64()
    }
}

/// Deterministic, reproducible random number generator.
///
/// Based on PCG (Permuted Congruential Generator) which provides:
/// - Excellent statistical properties
/// - Fast generation
/// - Predictable sequences from seed
/// - Independent streams via partitioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiRng {
    /// Seed this generator was constructed from.
    seed: u64,
    /// Current stream index for partitioning.
    stream: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl PiRng {
    /// Create a new generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = Pcg64::seed_from_u64(seed);
        Self {
            seed,
            stream: 0,
            rng,
        }
    }

    /// Create a generator seeded from process entropy.
    ///
    /// The drawn seed is recorded, so the run can still be replayed with
    /// `PiRng::new(rng.seed())`.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        Self::new(seed)
    }

    /// Get the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Get current stream index.
    #[must_use]
    pub const fn stream(&self) -> u64 {
        self.stream
    }

    /// Create partitioned generators for parallel sampling.
    ///
    /// The core performs no parallel aggregation itself; callers wanting
    /// concurrent batches take independent streams from here and combine
    /// the results. Each partition derives from the seed, so the set is
    /// reproducible regardless of execution order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pimc::engine::rng::PiRng;
    ///
    /// let mut rng = PiRng::new(42);
    /// let partitions = rng.partition(4);
    /// assert_eq!(partitions.len(), 4);
    /// ```
    #[must_use]
    pub fn partition(&mut self, n: usize) -> Vec<Self> {
        let partitions: Vec<Self> = (0..n)
            .map(|i| {
                let stream = self.stream + i as u64;
                let seed = self
                    .seed
                    .wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                Self {
                    seed: self.seed,
                    stream,
                    rng: Pcg64::seed_from_u64(seed),
                }
            })
            .collect();

        self.stream += n as u64;
        partitions
    }
}

impl RandomSource for PiRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}
