mod broadcast_config;
mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;
mod remote_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;

pub const CONFIG_FILE_NAME: &str = "stage-notifier.toml";
pub const CONFIG_DIR_ENV: &str = "SN_CONFIG_DIR";

const DEFAULT_BROADCAST_HOST: &str = "0.0.0.0";
const DEFAULT_BROADCAST_PORT: u16 = 8887;
const DEFAULT_REMOTE_URL: &str = "http://localhost/ci-receiver";
const DEFAULT_GATEWAY_HOST: &str = "127.0.0.1";
const DEFAULT_GATEWAY_PORT: u16 = 8886;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
