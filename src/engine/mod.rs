//! Pure sampling and estimation core.
//!
//! No I/O, no shared mutable state: every operation consumes randomness
//! exclusively from the [`rng::RandomSource`] it is handed and runs to
//! completion before returning. Drivers (the session loop, the CLI, tests)
//! own the source and the accumulated state.

pub mod estimator;
pub mod rng;
pub mod sampler;

pub use estimator::{estimate_pi, estimate_pi_detailed, EstimateSummary, CHUNK_SIZE};
pub use rng::{PiRng, RandomSource};
pub use sampler::{run_batch, BatchResult};
