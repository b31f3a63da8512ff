//! CLI command handlers.
//!
//! This module contains the execution logic for each CLI command.
//! Extracted to enable comprehensive testing of command behavior.

use crate::config::PiConfig;
use crate::engine::estimator::{estimate_pi, estimate_pi_detailed};
use crate::engine::rng::PiRng;
use crate::error::PiResult;
use crate::session::PiSession;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use super::output::{
    print_estimate, print_help, print_run_summary, print_tick, print_verify_result, print_version,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Estimate { samples, seed } => estimate(samples, seed),
        Command::Run {
            config_path,
            seed,
            ticks,
            batch_size,
            interval_ms,
            max_points,
        } => run_session(
            config_path.as_deref(),
            &RunOverrides {
                seed,
                batch_size,
                interval_ms,
                max_points,
            },
            ticks,
        ),
        Command::Verify {
            samples,
            seed,
            runs,
        } => verify(samples, seed, runs),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Flag overrides applied on top of the loaded configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOverrides {
    /// Seed override.
    pub seed: Option<u64>,
    /// Per-tick batch size override.
    pub batch_size: Option<u64>,
    /// Tick interval override (milliseconds).
    pub interval_ms: Option<u64>,
    /// Series capacity override.
    pub max_points: Option<usize>,
}

fn make_rng(seed: Option<u64>) -> PiRng {
    seed.map_or_else(PiRng::from_entropy, PiRng::new)
}

/// Run a one-shot estimate and print its summary.
#[must_use]
pub fn estimate(samples: u64, seed: Option<u64>) -> ExitCode {
    let mut rng = make_rng(seed);
    let seed_used = rng.seed();
    let started = Instant::now();

    match estimate_pi_detailed(samples, &mut rng) {
        Ok(summary) => {
            print_estimate(&summary, seed_used, started.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Resolve the session configuration from an optional file and overrides.
///
/// # Errors
///
/// Returns error if the configuration file cannot be loaded or fails
/// validation.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &RunOverrides,
) -> PiResult<PiConfig> {
    let mut config = match config_path {
        Some(path) => PiConfig::load(path)?,
        None => PiConfig::default(),
    };

    if overrides.seed.is_some() {
        config.sampling.seed = overrides.seed;
    }
    if let Some(batch_size) = overrides.batch_size {
        config.sampling.batch_size = batch_size;
    }
    if let Some(interval) = overrides.interval_ms {
        config.session.tick_interval_ms = interval;
    }
    if let Some(max_points) = overrides.max_points {
        config.session.max_points = max_points;
    }

    Ok(config)
}

/// Drive a session for `ticks` ticks at the configured cadence.
///
/// # Errors
///
/// Returns error if configuration loading fails or a tick rejects its
/// batch size.
pub fn drive_session(config: &PiConfig, ticks: u64) -> PiResult<PiSession> {
    let interval = Duration::from_millis(config.session.tick_interval_ms);
    let mut session = PiSession::from_config(config);

    session.start();
    for _ in 0..ticks {
        if let Some(point) = session.tick()? {
            print_tick(point.total, point.estimate);
        }
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
    session.stop();

    Ok(session)
}

/// Run the incremental session driver.
#[must_use]
pub fn run_session(config_path: Option<&Path>, overrides: &RunOverrides, ticks: u64) -> ExitCode {
    let config = match resolve_config(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    match drive_session(&config, ticks) {
        Ok(session) => {
            print_run_summary(&session);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Compute the estimates for a reproducibility check.
///
/// Every run re-seeds from the same value; the results must agree
/// bit-for-bit.
///
/// # Errors
///
/// Returns error if `samples` is zero.
pub fn verification_runs(samples: u64, seed: u64, runs: usize) -> PiResult<Vec<f64>> {
    let mut estimates = Vec::with_capacity(runs);
    for _ in 0..runs {
        let mut rng = PiRng::new(seed);
        estimates.push(estimate_pi(samples, &mut rng)?);
    }
    Ok(estimates)
}

/// Check that repeated runs with one seed agree bit-for-bit.
#[must_use]
pub fn verify(samples: u64, seed: Option<u64>, runs: usize) -> ExitCode {
    let seed = seed.unwrap_or_else(|| PiRng::from_entropy().seed());

    match verification_runs(samples, seed, runs) {
        Ok(estimates) => {
            let reproducible = estimates
                .windows(2)
                .all(|w| w[0].to_bits() == w[1].to_bits());
            print_verify_result(seed, samples, &estimates, reproducible);
            if reproducible {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
