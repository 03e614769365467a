use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    GatewayConfig, LoggingConfig, RemoteConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub broadcast: BroadcastConfig,
    pub remote: RemoteConfig,
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,

    /// Problems noticed while loading. Kept until a logger exists to report them.
    #[serde(skip)]
    load_warnings: Vec<String>,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for SN_CONFIG_DIR env var, else use the home directory
    /// 2. Load stage-notifier.toml if it exists, else use defaults
    /// 3. Apply SN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config from an explicit directory. A missing file is not an error;
    /// it is recorded in [`Config::load_warnings`] instead.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            let mut config = Config::default();
            config.load_warnings.push(format!(
                "Config file {} was not found in {}. Using default values.",
                CONFIG_FILE_NAME,
                config_dir.display()
            ));
            config
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SN_CONFIG_DIR env var > home directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir().ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.broadcast.validate()?;
        self.remote.validate()?;
        self.gateway.validate()?;
        self.logging.validate()?;

        if self.broadcast.port != 0
            && self.broadcast.port == self.gateway.port
            && self.broadcast.host == self.gateway.host
        {
            return Err(ConfigError::config(format!(
                "broadcast and gateway cannot share {}",
                self.broadcast.bind_addr()
            )));
        }

        Ok(())
    }

    /// Warnings collected by load(), such as a missing file or ignored env vars
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    /// Emit the load warnings. Call once the logger is initialized.
    pub fn log_load_warnings(&self) {
        for message in &self.load_warnings {
            warn!("{message}");
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  broadcast: {} (send timeout {}ms, buffer {}, heartbeat {}s)",
            self.broadcast.bind_addr(),
            self.broadcast.send_timeout_ms,
            self.broadcast.send_buffer_size,
            self.broadcast.heartbeat_interval_secs
        );
        info!(
            "  remote: PUT {} (timeout {}s)",
            self.remote.url, self.remote.timeout_secs
        );
        info!("  gateway: {}", self.gateway.bind_addr());
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        let warnings = &mut self.load_warnings;

        // Broadcast
        Self::apply_env_string("SN_BROADCAST_HOST", &mut self.broadcast.host);
        Self::apply_env_parse("SN_BROADCAST_PORT", &mut self.broadcast.port, warnings);
        Self::apply_env_parse(
            "SN_BROADCAST_SEND_TIMEOUT_MS",
            &mut self.broadcast.send_timeout_ms,
            warnings,
        );
        Self::apply_env_parse(
            "SN_BROADCAST_SEND_BUFFER_SIZE",
            &mut self.broadcast.send_buffer_size,
            warnings,
        );
        Self::apply_env_parse(
            "SN_BROADCAST_HEARTBEAT_INTERVAL_SECS",
            &mut self.broadcast.heartbeat_interval_secs,
            warnings,
        );

        // Remote
        Self::apply_env_string("SN_REMOTE_URL", &mut self.remote.url);
        Self::apply_env_parse("SN_REMOTE_TIMEOUT_SECS", &mut self.remote.timeout_secs, warnings);

        // Gateway
        Self::apply_env_string("SN_GATEWAY_HOST", &mut self.gateway.host);
        Self::apply_env_parse("SN_GATEWAY_PORT", &mut self.gateway.port, warnings);

        // Logging
        Self::apply_env_parse("SN_LOG_LEVEL", &mut self.logging.level, warnings);
        Self::apply_env_bool("SN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SN_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored, leaving the file/default value in place.
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &str,
        target: &mut T,
        warnings: &mut Vec<String>,
    ) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warnings.push(format!("Ignoring unparseable {var_name}={val}")),
            }
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
