// src/config/mod.rs

//! Dotfile configuration for the call-me client.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Resolve where the dotfile lives (`paths.rs`).
//! - Load a dotfile from disk (`loader.rs`).
//! - Check that a loaded record is complete (`validate.rs`).

pub mod loader;
pub mod model;
pub mod paths;
pub mod validate;

pub use loader::{init_template, new_config, new_config_from};
pub use model::{Config, RedisChannels};
pub use paths::{DEFAULT_CONFIG_FILENAME, config_path_in, resolve_config_path};
