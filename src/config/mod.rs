//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs
//! - Compile-time schema via serde (`deny_unknown_fields`)
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{PiError, PiResult};

/// Top-level configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PiConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Sampling settings.
    #[validate(nested)]
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Session driver settings.
    #[validate(nested)]
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl PiConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> PiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> PiConfigBuilder {
        PiConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> PiResult<()> {
        if self.sampling.batch_size > MAX_TICK_BATCH {
            return Err(PiError::config(format!(
                "batch size {} exceeds the per-tick cap of {MAX_TICK_BATCH}",
                self.sampling.batch_size
            )));
        }

        if self.session.tick_interval_ms > 60_000 {
            return Err(PiError::config(
                "tick interval should not exceed one minute",
            ));
        }

        Ok(())
    }
}

/// Upper bound on points sampled in a single tick.
///
/// Keeps one driver tick bounded in latency; larger totals belong to the
/// chunked estimator.
pub const MAX_TICK_BATCH: u64 = 10_000_000;

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            sampling: SamplingConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct PiConfigBuilder {
    seed: Option<u64>,
    batch_size: Option<u64>,
    max_points: Option<usize>,
    tick_interval_ms: Option<u64>,
}

impl PiConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-tick batch size.
    #[must_use]
    pub const fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the chart series capacity.
    #[must_use]
    pub const fn max_points(mut self, max_points: usize) -> Self {
        self.max_points = Some(max_points);
        self
    }

    /// Set the driver tick interval in milliseconds.
    #[must_use]
    pub const fn tick_interval_ms(mut self, interval: u64) -> Self {
        self.tick_interval_ms = Some(interval);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> PiConfig {
        let mut config = PiConfig::default();

        if self.seed.is_some() {
            config.sampling.seed = self.seed;
        }

        if let Some(batch_size) = self.batch_size {
            config.sampling.batch_size = batch_size;
        }

        if let Some(max_points) = self.max_points {
            config.session.max_points = max_points;
        }

        if let Some(interval) = self.tick_interval_ms {
            config.session.tick_interval_ms = interval;
        }

        config
    }
}

/// Sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SamplingConfig {
    /// Explicit seed; `None` draws one from process entropy per session.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Points sampled per driver tick.
    #[validate(range(min = 1))]
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
}

fn default_batch_size() -> u64 {
    500
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_size: default_batch_size(),
        }
    }
}

/// Session driver settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionConfig {
    /// Maximum chart points retained before FIFO eviction.
    #[validate(range(min = 1))]
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Driver tick interval in milliseconds; zero ticks back-to-back.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_max_points() -> usize {
    800
}

fn default_tick_interval_ms() -> u64 {
    100
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}
