// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILENAME;

/// Command-line arguments for `callme`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "callme",
    version,
    about = "Inspect and validate the call-me dotfile.",
    long_about = None
)]
pub struct CliArgs {
    /// Explicit path to the config file (JSON).
    ///
    /// Default: `<home>/<filename>`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Dotfile name looked up in the home directory.
    #[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_CONFIG_FILENAME)]
    pub filename: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CALLME_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print where the config file is expected.
    Path,

    /// Load and validate the config file.
    Check,

    /// Print the loaded config with the password masked.
    Show {
        /// Print the JSON shape instead of a summary.
        #[arg(long)]
        json: bool,
    },

    /// Write an empty config template to fill in.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
