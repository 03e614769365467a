use crate::{ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_HOST, DEFAULT_GATEWAY_PORT};

use serde::Deserialize;

/// Listener for host plugin requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_GATEWAY_HOST),
            port: DEFAULT_GATEWAY_PORT,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::gateway("gateway.host must not be empty"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
