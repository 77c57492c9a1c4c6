// tests/home_dir.rs

//! Exercises the real home-directory lookup. Kept to a single test in its
//! own binary because it rewrites `HOME` for the process.

use callme::config::{DEFAULT_CONFIG_FILENAME, resolve_config_path};
use callme::errors::CallMeError;
use callme::new_config;
use callme_test_utils::builders::ConfigBuilder;

#[cfg(unix)]
#[test]
fn new_config_reads_dotfile_from_home() {
    let home = tempfile::tempdir().unwrap();
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var("HOME", home.path()) };

    let expected = home.path().join(DEFAULT_CONFIG_FILENAME);
    assert_eq!(resolve_config_path(DEFAULT_CONFIG_FILENAME).unwrap(), expected);

    match new_config(DEFAULT_CONFIG_FILENAME) {
        Err(CallMeError::FileMissing(p)) => assert_eq!(p, expected),
        other => panic!("expected FileMissing, got {other:?}"),
    }

    std::fs::write(&expected, ConfigBuilder::new().to_json()).unwrap();
    let cfg = new_config(DEFAULT_CONFIG_FILENAME).unwrap();
    assert!(cfg.is_valid());
    assert_eq!(cfg.path, expected);
    assert_eq!(cfg.redis_channels.non_emergent, "nonemergent");

    std::fs::write(&expected, ConfigBuilder::new().without("redis_password").to_json()).unwrap();
    let err = new_config(DEFAULT_CONFIG_FILENAME).unwrap_err();
    assert!(matches!(err, CallMeError::InvalidConfig { .. }));
    assert_eq!(err.missing_fields(), &["redis_password"]);
}
