//! Command-line interface for the sampling engine.
//!
//! The binary is a thin driver over the pure core: argument parsing in
//! [`args`], command handlers in [`commands`], formatting in [`output`].

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
