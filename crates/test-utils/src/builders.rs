#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use callme::config::DEFAULT_CONFIG_FILENAME;
use callme::fs::mock::MockFileSystem;
use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for dotfile bodies, so tests can drop individual keys.
///
/// Starts from a complete, valid config.
pub struct ConfigBuilder {
    body: Map<String, Value>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        let Value::Object(body) = json!({
            "redis_url": "https://url.to.redis:1234",
            "redis_password": "password",
            "redis_channels": {
                "emergency": "emergency",
                "nonemergent": "nonemergent"
            }
        }) else {
            unreachable!("json! object literal")
        };
        Self { body }
    }

    /// Start from `{}`.
    pub fn empty() -> Self {
        Self { body: Map::new() }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.body.insert("redis_url".into(), json!(url));
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.body.insert("redis_password".into(), json!(password));
        self
    }

    pub fn emergency(self, channel: &str) -> Self {
        self.channel("emergency", channel)
    }

    pub fn non_emergent(self, channel: &str) -> Self {
        self.channel("nonemergent", channel)
    }

    /// Remove a key; dotted names reach into `redis_channels`.
    pub fn without(mut self, key: &str) -> Self {
        match key.split_once('.') {
            Some((outer, inner)) => {
                if let Some(Value::Object(obj)) = self.body.get_mut(outer) {
                    obj.remove(inner);
                }
            }
            None => {
                self.body.remove(key);
            }
        }
        self
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.body.clone()).to_string()
    }

    /// Write into `<home>/.go-call-me.json` on a mock filesystem.
    pub fn write_mock(&self, fs: &MockFileSystem, home: &Path) -> PathBuf {
        let path = home.join(DEFAULT_CONFIG_FILENAME);
        fs.add_file(&path, self.to_json());
        path
    }

    /// Write into a fresh temporary home directory.
    ///
    /// Keep the returned `TempDir` alive for as long as the file is needed.
    pub fn write_temp(&self) -> Result<(TempDir, PathBuf)> {
        let home = tempfile::tempdir()?;
        let path = home.path().join(DEFAULT_CONFIG_FILENAME);
        std::fs::write(&path, self.to_json())?;
        Ok((home, path))
    }

    fn channel(mut self, key: &str, channel: &str) -> Self {
        let channels = self
            .body
            .entry("redis_channels")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(obj) = channels {
            obj.insert(key.into(), json!(channel));
        }
        self
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
