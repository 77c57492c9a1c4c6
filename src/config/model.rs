// src/config/model.rs

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Connection settings for the message-queue backend, as read from the
/// dotfile.
///
/// ```json
/// {
///   "redis_url": "https://url.to.redis:1234",
///   "redis_password": "password",
///   "redis_channels": { "emergency": "emergency", "nonemergent": "nonemergent" }
/// }
/// ```
///
/// Every key is optional when parsing; missing or `null` keys stay empty and
/// are reported by validation instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "null_as_default")]
    pub redis_url: String,

    #[serde(deserialize_with = "null_as_default")]
    pub redis_password: String,

    #[serde(deserialize_with = "null_as_default")]
    pub redis_channels: RedisChannels,

    /// Where this record was loaded from. Set on every load attempt.
    #[serde(skip)]
    pub path: PathBuf,

    /// Whether the backing file was found and read. Says nothing about the
    /// string fields being populated.
    #[serde(skip)]
    pub loaded: bool,
}

/// `redis_channels` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisChannels {
    #[serde(deserialize_with = "null_as_default")]
    pub emergency: String,

    #[serde(rename = "nonemergent", deserialize_with = "null_as_default")]
    pub non_emergent: String,
}

/// `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Copy of this record with the password masked, for display.
    pub fn redacted(&self) -> Config {
        let mut copy = self.clone();
        if !copy.redis_password.is_empty() {
            copy.redis_password = "********".to_string();
        }
        copy
    }

    /// Just the JSON shape of the record, pretty-printed.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
