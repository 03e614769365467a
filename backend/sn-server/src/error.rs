use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sn_config::ConfigError),

    #[error("Relay error: {0}")]
    Relay(#[from] sn_relay::RelayError),

    #[error("Failed to prepare log directory {path}: {source} {location}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to bind gateway on {addr}: {source} {location}")]
    GatewayBind {
        addr: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn log_dir(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::LogDir {
            path: path.display().to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn gateway_bind(addr: &str, source: std::io::Error) -> Self {
        Self::GatewayBind {
            addr: addr.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
