//! # pimc
//!
//! Monte Carlo π estimation engine.
//!
//! Uniformly samples points in the square [-1,1]×[-1,1] and derives π from
//! the fraction landing inside the inscribed unit circle. The sampling and
//! estimation core is pure and bitwise-reproducible under a fixed seed; a
//! driver session layers the start/stop/reset/tick loop on top of it.
//!
//! ## Example
//!
//! ```rust
//! use pimc::prelude::*;
//!
//! let mut rng = PiRng::new(42);
//! let batch = run_batch(10, &mut rng)?;
//! assert_eq!(batch.total, 10);
//! assert!(batch.hits <= batch.total);
//!
//! let estimate = estimate_pi(50_000, &mut PiRng::new(1))?;
//! assert!((estimate - std::f64::consts::PI).abs() < 0.1);
//! # Ok::<(), pimc::PiError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{PiConfig, PiConfigBuilder};
    pub use crate::engine::estimator::{
        estimate_pi, estimate_pi_detailed, EstimateSummary, CHUNK_SIZE,
    };
    pub use crate::engine::rng::{PiRng, RandomSource};
    pub use crate::engine::sampler::{run_batch, BatchResult};
    pub use crate::error::{PiError, PiResult};
    pub use crate::session::{Accumulator, EstimateSeries, PiSession, RunState, SeriesPoint};
}

/// Re-export for public API
pub use error::{PiError, PiResult};
