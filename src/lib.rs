// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{Config, init_template, new_config_from, resolve_config_path};
use crate::fs::FileSystem;

pub use crate::config::new_config;
pub use crate::errors::CallMeError;

/// High-level entry point used by `main.rs`.
///
/// All command output goes to `out`; diagnostics go through `tracing`.
pub fn run<W: Write>(args: CliArgs, fs: &dyn FileSystem, out: &mut W) -> Result<()> {
    let path = config_path(&args)?;
    debug!(path = %path.display(), command = ?args.command, "running command");

    match args.command {
        Command::Path => {
            writeln!(out, "{}", path.display())?;
        }
        Command::Check => {
            let cfg = new_config_from(fs, &path)?;
            info!(path = %path.display(), "config is valid");
            writeln!(out, "ok")?;
            print_summary(out, &cfg)?;
        }
        Command::Show { json } => {
            let cfg = Config::load_from(fs, &path)?;
            if json {
                let body = cfg.redacted().to_json_pretty().context("serialising config")?;
                writeln!(out, "{body}")?;
            } else {
                print_summary(out, &cfg)?;
                if let Err(e) = cfg.validate() {
                    writeln!(out, "status:         {e}")?;
                }
            }
        }
        Command::Init { force } => {
            init_template(fs, &path, force)?;
            writeln!(out, "wrote config template to {}", path.display())?;
        }
    }

    Ok(())
}

/// `--config` wins; otherwise `--filename` is looked up in the home directory.
fn config_path(args: &CliArgs) -> Result<PathBuf> {
    match args.config {
        Some(ref explicit) => Ok(PathBuf::from(explicit)),
        None => Ok(resolve_config_path(&args.filename)?),
    }
}

/// Human-readable view of a record, password masked.
fn print_summary<W: Write>(out: &mut W, cfg: &Config) -> Result<()> {
    let redacted = cfg.redacted();
    writeln!(out, "path:           {}", redacted.path.display())?;
    writeln!(out, "redis_url:      {}", redacted.redis_url)?;
    writeln!(out, "redis_password: {}", redacted.redis_password)?;
    writeln!(out, "emergency:      {}", redacted.redis_channels.emergency)?;
    writeln!(out, "nonemergent:    {}", redacted.redis_channels.non_emergent)?;
    Ok(())
}
