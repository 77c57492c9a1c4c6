// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallMeError {
    /// No home directory could be determined for the current user.
    ///
    /// There is no sensible fallback location, so callers should treat this
    /// as fatal.
    #[error("could not determine the home directory of the current user")]
    HomeDirUnavailable,

    #[error("Please setup your config file [{}]", .0.display())]
    FileMissing(PathBuf),

    #[error("reading config file {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {}: {source}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("writing config file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the config has yet to be loaded")]
    NotLoaded,

    /// One or more required fields are empty. `missing` holds their JSON keys.
    #[error("Incomplete configuration")]
    Incomplete { missing: Vec<&'static str> },

    #[error("please validate the {} file. See README for details", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: Box<CallMeError>,
    },
}

impl CallMeError {
    /// JSON keys reported missing, looking through `InvalidConfig`.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            CallMeError::Incomplete { missing } => missing.as_slice(),
            CallMeError::InvalidConfig { source, .. } => source.missing_fields(),
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, CallMeError>;
