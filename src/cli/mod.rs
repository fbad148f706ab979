//! CLI module
//!
//! Command-line argument parsing for the point service binary.

pub mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments
///
/// Exits the process with a usage message on invalid arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
