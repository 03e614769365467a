use crate::{ConfigError, ConfigErrorResult, DEFAULT_REMOTE_URL};

use std::time::Duration;

use serde::Deserialize;
use url::Url;

// Request timeout constraints (seconds)
pub const MIN_REMOTE_TIMEOUT_SECS: u64 = 1;
pub const MAX_REMOTE_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

/// The HTTP receiver that gets a PUT copy of every event.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_REMOTE_URL),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let parsed = Url::parse(&self.url).map_err(|e| {
            ConfigError::remote(format!("remote.url '{}' is not a valid URL: {e}", self.url))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::remote(format!(
                "remote.url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.timeout_secs < MIN_REMOTE_TIMEOUT_SECS || self.timeout_secs > MAX_REMOTE_TIMEOUT_SECS
        {
            return Err(ConfigError::remote(format!(
                "remote.timeout_secs must be {}-{}, got {}",
                MIN_REMOTE_TIMEOUT_SECS, MAX_REMOTE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
