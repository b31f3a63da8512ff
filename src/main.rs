//! pimc CLI - Monte Carlo π estimation engine
//!
//! Command-line driver for the sampling core.

use std::process::ExitCode;

fn main() -> ExitCode {
    pimc::cli::run_cli(pimc::cli::Args::parse())
}
