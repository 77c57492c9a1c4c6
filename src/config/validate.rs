// src/config/validate.rs

use tracing::debug;

use crate::config::model::Config;
use crate::errors::{CallMeError, Result};

impl Config {
    /// Check that this record is usable by the queue client.
    ///
    /// This checks, in order:
    /// - the record was loaded from an existing file
    /// - `redis_url`, `redis_password` and both channels are non-empty
    pub fn validate(&self) -> Result<()> {
        if !self.loaded {
            return Err(CallMeError::NotLoaded);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!(path = %self.path.display(), ?missing, "config is incomplete");
            return Err(CallMeError::Incomplete { missing });
        }

        Ok(())
    }

    /// Same outcome as [`Config::validate`], without the reason.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// JSON keys of the required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("redis_url", &self.redis_url),
            ("redis_password", &self.redis_password),
            ("redis_channels.emergency", &self.redis_channels.emergency),
            ("redis_channels.nonemergent", &self.redis_channels.non_emergent),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }
}
