//! CLI output formatting.
//!
//! This module contains all output formatting functions for the CLI.
//! Extracted to enable testing of output generation.

use crate::engine::estimator::EstimateSummary;
use crate::session::PiSession;

/// Print version information.
pub fn print_version() {
    println!("pimc {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"pimc - Monte Carlo π estimation engine

USAGE:
    pimc <COMMAND> [OPTIONS]

COMMANDS:
    estimate <samples>          One-shot π estimate
        --seed <N>              Use a fixed seed (default: process entropy)

    run [config.yaml]           Drive a sampling session at a fixed cadence
        --seed <N>              Override the configured seed
        --ticks <N>             Number of ticks to run (default: 100)
        --batch-size <N>        Points per tick (default: 500)
        --interval-ms <N>       Tick interval in milliseconds (default: 100)
        --max-points <N>        Chart series capacity (default: 800)

    verify <samples>            Re-run the same seed and compare bit-for-bit
        --seed <N>              Seed to verify (default: drawn once, reused)
        --runs <N>              Number of verification runs (default: 3)

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    pimc estimate 1000000 --seed 42
    pimc run --ticks 50 --interval-ms 0
    pimc verify 50000 --seed 42 --runs 5
"
    );
}

/// Print a one-shot estimate summary.
pub fn print_estimate(summary: &EstimateSummary, seed: u64, secs: f64) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("π ≈ {:.6}", summary.estimate);
    println!("samples:   {}", summary.samples);
    println!("std error: {:.6}", summary.std_error);
    println!(
        "95% CI:    [{:.6}, {:.6}]",
        summary.confidence_interval.0, summary.confidence_interval.1
    );
    println!("seed:      {seed}");
    println!("elapsed:   {secs:.3} s");
}

/// Print one live session tick line.
pub fn print_tick(total: u64, estimate: f64) {
    println!("π ≈ {estimate:.6}  samples: {total}");
}

/// Print the final session summary.
pub fn print_run_summary(session: &PiSession) {
    let estimate = session
        .estimate()
        .map_or_else(|| "--".to_string(), |e| format!("{e:.6}"));

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("π ≈ {estimate}");
    println!("samples:       {}", session.accumulator().total());
    println!("seed:          {}", session.seed());
    println!("series points: {}", session.series().len());
    println!("elapsed:       {:.1} s", session.elapsed().as_secs_f64());
}

/// Print the reproducibility verdict.
pub fn print_verify_result(seed: u64, samples: u64, estimates: &[f64], reproducible: bool) {
    let symbol = if reproducible { "✓" } else { "✗" };
    let verdict = if reproducible { "PASSED" } else { "FAILED" };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Reproducibility: {symbol} {verdict}");
    println!("seed:    {seed}");
    println!("samples: {samples}");
    for (i, estimate) in estimates.iter().enumerate() {
        println!("run {}: π ≈ {estimate:.12}", i + 1);
    }
}
