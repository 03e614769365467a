use crate::{EventRelay, RelayVerdict};

use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use log::{debug, error};
use serde::Serialize;

pub const EXTENSION_TYPE: &str = "notification";
pub const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

pub const REQUEST_NOTIFICATIONS_INTERESTED_IN: &str = "notifications-interested-in";
pub const REQUEST_STAGE_STATUS: &str = "stage-status";
pub const REQUEST_PLUGIN_IDENTIFIER: &str = "plugin-identifier";

/// Host request kinds understood by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginRequest {
    NotificationsInterestedIn,
    StageStatus,
    PluginIdentifier,
}

impl PluginRequest {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            REQUEST_NOTIFICATIONS_INTERESTED_IN => Some(Self::NotificationsInterestedIn),
            REQUEST_STAGE_STATUS => Some(Self::StageStatus),
            REQUEST_PLUGIN_IDENTIFIER => Some(Self::PluginIdentifier),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NotificationsInterestedIn => REQUEST_NOTIFICATIONS_INTERESTED_IN,
            Self::StageStatus => REQUEST_STAGE_STATUS,
            Self::PluginIdentifier => REQUEST_PLUGIN_IDENTIFIER,
        }
    }
}

/// Status code and rendered JSON body handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status_code: StatusCode,
    pub body: String,
}

#[derive(Serialize)]
struct NotificationsInterestedIn {
    notifications: Vec<&'static str>,
}

#[derive(Serialize)]
struct PluginIdentifier {
    extension: &'static str,
    versions: &'static [&'static str],
}

/// Translates host requests into relay calls and verdicts back into responses
#[derive(Clone)]
pub struct NotificationGateway {
    relay: Arc<EventRelay>,
}

impl NotificationGateway {
    pub fn new(relay: Arc<EventRelay>) -> Self {
        Self { relay }
    }

    pub fn relay(&self) -> &EventRelay {
        &self.relay
    }

    /// Dispatch a request by its host-side name
    pub async fn handle(&self, request_name: &str, body: Bytes) -> GatewayResponse {
        debug!("Received plugin request {request_name}");

        match PluginRequest::from_name(request_name) {
            Some(PluginRequest::NotificationsInterestedIn) => Self::notifications_interested_in(),
            Some(PluginRequest::StageStatus) => self.stage_status(body).await,
            Some(PluginRequest::PluginIdentifier) => Self::plugin_identifier(),
            None => render_json(
                StatusCode::NOT_FOUND,
                &RelayVerdict::failure(format!("Unsupported request: {request_name}")),
            ),
        }
    }

    /// Declares interest in stage-status notifications only
    pub fn notifications_interested_in() -> GatewayResponse {
        render_json(
            StatusCode::OK,
            &NotificationsInterestedIn {
                notifications: vec![REQUEST_STAGE_STATUS],
            },
        )
    }

    pub fn plugin_identifier() -> GatewayResponse {
        render_json(
            StatusCode::OK,
            &PluginIdentifier {
                extension: EXTENSION_TYPE,
                versions: SUPPORTED_VERSIONS,
            },
        )
    }

    /// Relay the raw request body; 200 on success, 500 with the same body shape on failure
    pub async fn stage_status(&self, body: Bytes) -> GatewayResponse {
        let verdict = self.relay.relay(body).await;

        let status_code = if verdict.is_success() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        render_json(status_code, &verdict)
    }
}

fn render_json<T: Serialize>(status_code: StatusCode, value: &T) -> GatewayResponse {
    match serde_json::to_string(value) {
        Ok(body) => GatewayResponse { status_code, body },
        Err(e) => {
            error!("Failed to render response: {e}");
            GatewayResponse {
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::from(r#"{"status":"failure","messages":["failed to render response"]}"#),
            }
        }
    }
}
