//! CLI argument parsing.
//!
//! This module provides the argument parser for the pimc CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One-shot π estimate.
    Estimate {
        /// Total samples to draw.
        samples: u64,
        /// Optional fixed seed.
        seed: Option<u64>,
    },
    /// Drive a sampling session at a fixed cadence.
    Run {
        /// Optional path to a configuration YAML file.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed: Option<u64>,
        /// Number of ticks to run.
        ticks: u64,
        /// Optional per-tick batch size override.
        batch_size: Option<u64>,
        /// Optional tick interval override (milliseconds).
        interval_ms: Option<u64>,
        /// Optional chart series capacity override.
        max_points: Option<usize>,
    },
    /// Verify seeded reproducibility across repeated runs.
    Verify {
        /// Total samples per run.
        samples: u64,
        /// Optional fixed seed (drawn once and reused if omitted).
        seed: Option<u64>,
        /// Number of verification runs.
        runs: usize,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "estimate" => Self::parse_estimate_command(args),
            "run" => Self::parse_run_command(args),
            "verify" => Self::parse_verify_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'estimate' command arguments.
    fn parse_estimate_command(args: &[String]) -> Command {
        let Some(samples) = args.get(2).and_then(|s| s.parse().ok()) else {
            eprintln!("Error: 'estimate' command requires a positive sample count");
            return Command::Help;
        };

        let mut seed = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            seed = Some(s);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Estimate { samples, seed }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut seed = None;
        let mut ticks = 100;
        let mut batch_size = None;
        let mut interval_ms = None;
        let mut max_points = None;

        let mut i = 2;
        if let Some(first) = args.get(2) {
            if !first.starts_with("--") {
                config_path = Some(PathBuf::from(first));
                i = 3;
            }
        }

        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            seed = Some(s);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--ticks" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            ticks = n;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--batch-size" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            batch_size = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--interval-ms" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            interval_ms = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--max-points" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            max_points = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Run {
            config_path,
            seed,
            ticks,
            batch_size,
            interval_ms,
            max_points,
        }
    }

    /// Parse the 'verify' command arguments.
    fn parse_verify_command(args: &[String]) -> Command {
        let Some(samples) = args.get(2).and_then(|s| s.parse().ok()) else {
            eprintln!("Error: 'verify' command requires a positive sample count");
            return Command::Help;
        };

        let mut seed = None;
        let mut runs = 3;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            seed = Some(s);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--runs" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            runs = n;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Verify {
            samples,
            seed,
            runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_shows_help() {
        let args = Args::parse_from(["pimc"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_parse_help_flags() {
        for flag in ["-h", "--help", "help"] {
            let args = Args::parse_from(["pimc", flag]);
            assert_eq!(args.command, Command::Help);
        }
    }

    #[test]
    fn test_parse_version_flags() {
        for flag in ["-V", "--version", "version"] {
            let args = Args::parse_from(["pimc", flag]);
            assert_eq!(args.command, Command::Version);
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let args = Args::parse_from(["pimc", "unknown-cmd"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_parse_estimate() {
        let args = Args::parse_from(["pimc", "estimate", "100000"]);
        assert_eq!(
            args.command,
            Command::Estimate {
                samples: 100_000,
                seed: None
            }
        );
    }

    #[test]
    fn test_parse_estimate_with_seed() {
        let args = Args::parse_from(["pimc", "estimate", "1000", "--seed", "42"]);
        assert_eq!(
            args.command,
            Command::Estimate {
                samples: 1000,
                seed: Some(42)
            }
        );
    }

    #[test]
    fn test_parse_estimate_missing_samples() {
        let args = Args::parse_from(["pimc", "estimate"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_parse_estimate_non_numeric_samples() {
        let args = Args::parse_from(["pimc", "estimate", "lots"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_parse_run_defaults() {
        let args = Args::parse_from(["pimc", "run"]);
        match args.command {
            Command::Run {
                config_path,
                seed,
                ticks,
                batch_size,
                interval_ms,
                max_points,
            } => {
                assert_eq!(config_path, None);
                assert_eq!(seed, None);
                assert_eq!(ticks, 100);
                assert_eq!(batch_size, None);
                assert_eq!(interval_ms, None);
                assert_eq!(max_points, None);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_with_config_path() {
        let args = Args::parse_from(["pimc", "run", "session.yaml", "--ticks", "5"]);
        match args.command {
            Command::Run {
                config_path, ticks, ..
            } => {
                assert_eq!(config_path, Some(PathBuf::from("session.yaml")));
                assert_eq!(ticks, 5);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_all_flags() {
        let args = Args::parse_from([
            "pimc",
            "run",
            "--seed",
            "7",
            "--ticks",
            "20",
            "--batch-size",
            "250",
            "--interval-ms",
            "0",
            "--max-points",
            "16",
        ]);
        match args.command {
            Command::Run {
                config_path,
                seed,
                ticks,
                batch_size,
                interval_ms,
                max_points,
            } => {
                assert_eq!(config_path, None);
                assert_eq!(seed, Some(7));
                assert_eq!(ticks, 20);
                assert_eq!(batch_size, Some(250));
                assert_eq!(interval_ms, Some(0));
                assert_eq!(max_points, Some(16));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_dangling_flag() {
        let args = Args::parse_from(["pimc", "run", "--seed"]);
        match args.command {
            Command::Run { seed, .. } => assert_eq!(seed, None),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_verify() {
        let args = Args::parse_from(["pimc", "verify", "50000", "--seed", "42", "--runs", "5"]);
        assert_eq!(
            args.command,
            Command::Verify {
                samples: 50_000,
                seed: Some(42),
                runs: 5
            }
        );
    }

    #[test]
    fn test_parse_verify_default_runs() {
        let args = Args::parse_from(["pimc", "verify", "1000"]);
        assert_eq!(
            args.command,
            Command::Verify {
                samples: 1000,
                seed: None,
                runs: 3
            }
        );
    }

    #[test]
    fn test_parse_verify_missing_samples() {
        let args = Args::parse_from(["pimc", "verify"]);
        assert_eq!(args.command, Command::Help);
    }
}
