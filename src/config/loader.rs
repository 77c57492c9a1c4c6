// src/config/loader.rs

use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::model::Config;
use crate::config::paths::resolve_config_path;
use crate::errors::{CallMeError, Result};
use crate::fs::{FileSystem, RealFileSystem};

impl Config {
    /// Load the dotfile at `path` into this record.
    ///
    /// `self.path` is set before anything else, so it is populated even when
    /// the read fails. `self.loaded` becomes true as soon as the file has been
    /// read, independently of whether its JSON is usable:
    ///
    /// - unreadable file: [`CallMeError::ReadFailure`], fields untouched,
    ///   `loaded == false`.
    /// - malformed JSON: [`CallMeError::ParseFailure`], fields untouched,
    ///   `loaded == true`.
    ///
    /// `null` values read as empty and repeated keys keep their last value.
    ///
    /// This only deserializes; completeness is checked by [`Config::validate`].
    pub fn load(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<bool> {
        self.path = path.to_path_buf();

        let raw = fs.read(path).map_err(|source| {
            debug!(path = %path.display(), error = %source, "config read failed");
            CallMeError::ReadFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;
        trace!(path = %path.display(), bytes = raw.len(), "read config file");
        self.loaded = true;

        // Going through `Value` first lets a repeated key keep its last value.
        let parsed: Config = serde_json::from_slice::<serde_json::Value>(&raw)
            .and_then(serde_json::from_value)
            .map_err(|source| CallMeError::ParseFailure {
                path: path.to_path_buf(),
                source,
            })?;

        self.redis_url = parsed.redis_url;
        self.redis_password = parsed.redis_password;
        self.redis_channels = parsed.redis_channels;

        debug!(path = %path.display(), "loaded config");
        Ok(true)
    }

    /// Build a fresh record from the dotfile at `path`.
    pub fn load_from(fs: &dyn FileSystem, path: &Path) -> Result<Config> {
        let mut cfg = Config::default();
        cfg.load(fs, path)?;
        Ok(cfg)
    }
}

/// Load and validate `filename` from the current user's home directory.
///
/// This is the recommended entry point for callers that just want a usable
/// config. Both failure messages are meant to be shown to the user as-is.
pub fn new_config(filename: &str) -> Result<Config> {
    let path = resolve_config_path(filename)?;
    new_config_from(&RealFileSystem, &path)
}

/// Load and validate the dotfile at an explicit `path`.
///
/// - missing file: [`CallMeError::FileMissing`], no load attempted.
/// - load errors are passed through.
/// - incomplete record: [`CallMeError::InvalidConfig`] wrapping the
///   validation error.
pub fn new_config_from(fs: &dyn FileSystem, path: &Path) -> Result<Config> {
    if !fs.exists(path) {
        return Err(CallMeError::FileMissing(path.to_path_buf()));
    }

    let cfg = Config::load_from(fs, path)?;

    cfg.validate().map_err(|source| CallMeError::InvalidConfig {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    Ok(cfg)
}

/// Write an empty dotfile template to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_template(fs: &dyn FileSystem, path: &Path, force: bool) -> Result<()> {
    let write_err = |source: io::Error| CallMeError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if fs.exists(path) && !force {
        return Err(write_err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "config file already exists (use --force to overwrite)",
        )));
    }

    let body = Config::default()
        .to_json_pretty()
        .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    fs.write(path, format!("{body}\n").as_bytes())
        .map_err(write_err)?;

    debug!(path = %path.display(), "wrote config template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use std::path::PathBuf;

    const FULL: &str = r#"{
        "redis_url": "https://url.to.redis:1234",
        "redis_password": "password",
        "redis_channels": { "emergency": "emergency", "nonemergent": "nonemergent" }
    }"#;

    fn home_file() -> PathBuf {
        PathBuf::from("/home/u/.go-call-me.json")
    }

    #[test]
    fn load_populates_fields_and_flags() {
        let fs = MockFileSystem::new();
        fs.add_file(home_file(), FULL);

        let mut cfg = Config::default();
        assert!(cfg.load(&fs, &home_file()).unwrap());

        assert_eq!(cfg.redis_url, "https://url.to.redis:1234");
        assert_eq!(cfg.redis_password, "password");
        assert_eq!(cfg.redis_channels.emergency, "emergency");
        assert_eq!(cfg.redis_channels.non_emergent, "nonemergent");
        assert_eq!(cfg.path, home_file());
        assert!(cfg.loaded);
    }

    #[test]
    fn missing_file_sets_path_but_not_loaded() {
        let fs = MockFileSystem::new();
        let mut cfg = Config::default();

        let err = cfg.load(&fs, &home_file()).unwrap_err();

        match err {
            CallMeError::ReadFailure { path, source } => {
                assert_eq!(path, home_file());
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ReadFailure, got {other:?}"),
        }
        assert_eq!(cfg.path, home_file());
        assert!(!cfg.loaded);
        assert_eq!(cfg.redis_url, "");
    }

    #[test]
    fn unreadable_file_passes_io_error_through() {
        let fs = MockFileSystem::new();
        fs.add_unreadable(home_file());

        let err = Config::load_from(&fs, &home_file()).unwrap_err();
        match err {
            CallMeError::ReadFailure { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected ReadFailure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_reported_and_leaves_fields_empty() {
        let fs = MockFileSystem::new();
        fs.add_file(home_file(), r#"{"redis_url": "x", "#);

        let mut cfg = Config::default();
        let err = cfg.load(&fs, &home_file()).unwrap_err();

        assert!(matches!(err, CallMeError::ParseFailure { .. }));
        assert!(cfg.loaded);
        assert_eq!(cfg.path, home_file());
        assert_eq!(cfg.redis_url, "");
    }

    #[test]
    fn null_field_is_incomplete_not_a_parse_failure() {
        let fs = MockFileSystem::new();
        fs.add_file(
            home_file(),
            r#"{
                "redis_url": null,
                "redis_password": "password",
                "redis_channels": { "emergency": "emergency", "nonemergent": "nonemergent" }
            }"#,
        );

        let mut cfg = Config::default();
        assert!(cfg.load(&fs, &home_file()).unwrap());

        assert!(cfg.loaded);
        assert_eq!(cfg.redis_password, "password");
        match cfg.validate() {
            Err(CallMeError::Incomplete { missing }) => assert_eq!(missing, vec!["redis_url"]),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn null_channels_object_reports_both_channels() {
        let fs = MockFileSystem::new();
        fs.add_file(
            home_file(),
            r#"{"redis_url": "u", "redis_password": "p", "redis_channels": null}"#,
        );

        let cfg = Config::load_from(&fs, &home_file()).unwrap();

        assert_eq!(
            cfg.missing_fields(),
            vec!["redis_channels.emergency", "redis_channels.nonemergent"]
        );
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let fs = MockFileSystem::new();
        fs.add_file(
            home_file(),
            r#"{
                "redis_url": "a",
                "redis_url": "b",
                "redis_password": "password",
                "redis_channels": { "emergency": "x", "emergency": "emergency", "nonemergent": "n" }
            }"#,
        );

        let cfg = Config::load_from(&fs, &home_file()).unwrap();

        assert_eq!(cfg.redis_url, "b");
        assert_eq!(cfg.redis_channels.emergency, "emergency");
        assert!(cfg.is_valid());
    }

    #[test]
    fn new_config_from_reports_missing_file_with_path() {
        let fs = MockFileSystem::new();

        let err = new_config_from(&fs, &home_file()).unwrap_err();

        assert!(matches!(err, CallMeError::FileMissing(ref p) if *p == home_file()));
        assert_eq!(
            err.to_string(),
            format!("Please setup your config file [{}]", home_file().display())
        );
    }

    #[test]
    fn new_config_from_wraps_validation_failure() {
        let fs = MockFileSystem::new();
        fs.add_file(home_file(), r#"{"redis_url": "redis://x"}"#);

        let err = new_config_from(&fs, &home_file()).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!(
                "please validate the {} file. See README for details",
                home_file().display()
            )
        );
        assert_eq!(
            err.missing_fields(),
            &[
                "redis_password",
                "redis_channels.emergency",
                "redis_channels.nonemergent"
            ]
        );
    }

    #[test]
    fn new_config_from_returns_valid_record() {
        let fs = MockFileSystem::new();
        fs.add_file(home_file(), FULL);

        let cfg = new_config_from(&fs, &home_file()).unwrap();
        assert!(cfg.is_valid());
        assert_eq!(cfg.path, home_file());
    }

    #[test]
    fn init_template_writes_loadable_but_incomplete_file() {
        let fs = MockFileSystem::new();

        init_template(&fs, &home_file(), false).unwrap();

        let cfg = Config::load_from(&fs, &home_file()).unwrap();
        assert!(cfg.loaded);
        assert!(!cfg.is_valid());
    }

    #[test]
    fn init_template_refuses_to_overwrite_without_force() {
        let fs = MockFileSystem::new();
        fs.add_file(home_file(), FULL);

        let err = init_template(&fs, &home_file(), false).unwrap_err();
        match err {
            CallMeError::WriteFailure { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists)
            }
            other => panic!("expected WriteFailure, got {other:?}"),
        }
        assert_eq!(fs.contents(home_file()).unwrap(), FULL.as_bytes());

        init_template(&fs, &home_file(), true).unwrap();
        assert_ne!(fs.contents(home_file()).unwrap(), FULL.as_bytes());
    }
}
