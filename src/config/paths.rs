// src/config/paths.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{CallMeError, Result};

/// Name of the dotfile looked up in the user's home directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".go-call-me.json";

/// Resolve `filename` against the current user's home directory.
///
/// Fails with [`CallMeError::HomeDirUnavailable`] when the platform cannot
/// tell us where home is; there is no fallback location.
pub fn resolve_config_path(filename: &str) -> Result<PathBuf> {
    let path = config_path_from(dirs::home_dir(), filename)?;
    debug!(path = %path.display(), "resolved config path");
    Ok(path)
}

fn config_path_from(home: Option<PathBuf>, filename: &str) -> Result<PathBuf> {
    let home = home.ok_or(CallMeError::HomeDirUnavailable)?;
    Ok(config_path_in(&home, filename))
}

/// Join `filename` onto an already known home directory.
pub fn config_path_in(home: &Path, filename: &str) -> PathBuf {
    home.join(filename)
}
