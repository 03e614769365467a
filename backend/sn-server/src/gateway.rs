//! Host-facing handlers. Each one hands the request to the notification
//! gateway and writes its status and JSON body back unchanged.

use crate::ServerState;

use sn_relay::{
    GatewayResponse, NotificationGateway, REQUEST_NOTIFICATIONS_INTERESTED_IN,
    REQUEST_PLUGIN_IDENTIFIER, REQUEST_STAGE_STATUS,
};

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// POST /notifications-interested-in
pub async fn notifications_interested_in(State(state): State<ServerState>) -> Response {
    dispatch(&state.gateway, REQUEST_NOTIFICATIONS_INTERESTED_IN, Bytes::new()).await
}

/// POST /stage-status - body is the raw event, relayed verbatim
pub async fn stage_status(State(state): State<ServerState>, body: Bytes) -> Response {
    dispatch(&state.gateway, REQUEST_STAGE_STATUS, body).await
}

/// GET /plugin-identifier
pub async fn plugin_identifier(State(state): State<ServerState>) -> Response {
    dispatch(&state.gateway, REQUEST_PLUGIN_IDENTIFIER, Bytes::new()).await
}

/// POST /requests/{name} - generic dispatch by host request name
pub async fn plugin_request(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    dispatch(&state.gateway, &name, body).await
}

async fn dispatch(gateway: &NotificationGateway, name: &str, body: Bytes) -> Response {
    into_response(gateway.handle(name, body).await)
}

fn into_response(response: GatewayResponse) -> Response {
    (
        response.status_code,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
