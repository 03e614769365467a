use std::error::Error as StdError;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Remote notification server rejected event with status {status} {location}")]
    RemoteRejected { status: u16, location: ErrorLocation },

    #[error("Remote notification server {url} unreachable: {cause} {location}")]
    RemoteUnreachable {
        url: String,
        cause: String,
        location: ErrorLocation,
    },

    #[error("Failed to build HTTP client: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl RelayError {
    #[track_caller]
    pub fn remote_rejected(status: u16) -> Self {
        Self::RemoteRejected {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a transport failure, keeping the whole source chain as the cause
    #[track_caller]
    pub fn remote_unreachable(url: &str, err: &reqwest::Error) -> Self {
        Self::RemoteUnreachable {
            url: url.to_string(),
            cause: error_chain(err),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn client_build(err: reqwest::Error) -> Self {
        Self::ClientBuild {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// The message reported to the host for this failure
    pub fn verdict_message(&self) -> String {
        match self {
            Self::RemoteRejected { status, .. } => {
                format!("Response code from remote notification server: {status}")
            }
            Self::RemoteUnreachable { url, cause, .. } => {
                format!("Could not reach remote notification server at {url}: {cause}")
            }
            Self::ClientBuild { message, .. } => {
                format!("HTTP client unavailable: {message}")
            }
        }
    }
}

/// Join an error and its sources, e.g. "error sending request: tcp connect error: Connection refused"
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, RelayError>;
