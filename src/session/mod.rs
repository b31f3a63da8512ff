//! Driver session: the run-state machine over the sampling core.
//!
//! Replaces the original timer-callback style with an explicit state
//! machine: {Idle, Running, Stopped} with transitions `start`, `stop`,
//! `reset`, `tick`. The core sampler is called only from `tick`, and only
//! while Running. `stop` halts ticking without touching accumulated state;
//! `reset` clears everything and re-seeds the generator so a session
//! replays identically.

pub mod accumulator;
pub mod series;

pub use accumulator::Accumulator;
pub use series::{EstimateSeries, SeriesPoint};

use crate::config::PiConfig;
use crate::engine::rng::PiRng;
use crate::engine::sampler::run_batch;
use crate::error::PiResult;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Session run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// No sampling has happened since construction or the last reset.
    #[default]
    Idle,
    /// Ticks sample batches.
    Running,
    /// Ticking halted; accumulated state preserved.
    Stopped,
}

/// A driver-owned estimation session.
///
/// Owns the generator, the running accumulator and the bounded chart
/// series. Not shared across concurrent accumulations; parallel drivers
/// use independent sessions.
#[derive(Debug, Clone)]
pub struct PiSession {
    /// Generator consumed by ticks.
    rng: PiRng,
    /// Points sampled per tick.
    batch_size: u64,
    /// Current run state.
    state: RunState,
    /// Running (hits, total) state.
    accumulator: Accumulator,
    /// Bounded (total, estimate) history for charting.
    series: EstimateSeries,
    /// Wall-clock instant of the first start; cleared by reset.
    started_at: Option<Instant>,
}

impl PiSession {
    /// Create a session with the given per-tick batch size and series
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if `max_points` is zero. A zero `batch_size` is accepted
    /// here and rejected by the first `tick`, so drivers can distinguish
    /// the programming error from a legitimate stopped skip.
    #[must_use]
    pub fn new(batch_size: u64, max_points: usize, rng: PiRng) -> Self {
        Self {
            rng,
            batch_size,
            state: RunState::Idle,
            accumulator: Accumulator::new(),
            series: EstimateSeries::new(max_points),
            started_at: None,
        }
    }

    /// Create a session from configuration.
    ///
    /// Without a configured seed, the generator is drawn from process
    /// entropy; the drawn seed is recorded for replay.
    #[must_use]
    pub fn from_config(config: &PiConfig) -> Self {
        let rng = config
            .sampling
            .seed
            .map_or_else(PiRng::from_entropy, PiRng::new);
        Self::new(config.sampling.batch_size, config.session.max_points, rng)
    }

    /// Begin (or resume) ticking.
    pub fn start(&mut self) {
        if self.state != RunState::Running {
            self.state = RunState::Running;
            if self.started_at.is_none() {
                self.started_at = Some(Instant::now());
            }
        }
    }

    /// Halt ticking without touching accumulated state.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
        }
    }

    /// Clear the accumulator and series, halt, and re-seed the generator
    /// from the recorded seed so the next run replays identically.
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.accumulator.reset();
        self.series.clear();
        self.started_at = None;
        self.rng = PiRng::new(self.rng.seed());
    }

    /// Run one batch if the session is running.
    ///
    /// Returns the appended series point, or `None` when Idle or Stopped
    /// (no batch call occurs then).
    ///
    /// # Errors
    ///
    /// Propagates [`crate::PiError::InvalidBatchSize`] for a zero batch
    /// size; the accumulator is untouched in that case.
    pub fn tick(&mut self) -> PiResult<Option<SeriesPoint>> {
        if self.state != RunState::Running {
            return Ok(None);
        }

        let batch = run_batch(self.batch_size, &mut self.rng)?;
        self.accumulator.record(&batch);

        // A successful batch guarantees a non-empty accumulator.
        let point = SeriesPoint {
            total: self.accumulator.total(),
            estimate: self.accumulator.estimate().unwrap_or(0.0),
        };
        self.series.push(point);
        Ok(Some(point))
    }

    /// Current run state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether ticks currently sample.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Running accumulation state.
    #[must_use]
    pub const fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Chart series.
    #[must_use]
    pub const fn series(&self) -> &EstimateSeries {
        &self.series
    }

    /// Current π estimate, or `None` before any sampling.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        self.accumulator.estimate()
    }

    /// Points sampled per tick.
    #[must_use]
    pub const fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Seed of the session generator.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Wall-clock time since the first start; zero before it.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.map_or(Duration::ZERO, |t| t.elapsed())
    }
}
