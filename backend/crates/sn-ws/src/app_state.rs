use crate::{
    ConnectionConfig, ConnectionId, Metrics, ShutdownCoordinator, SubscriberSet,
    WebSocketConnection,
};

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
    routing::get,
};
use log::{debug, error, warn};
use tokio::sync::mpsc;

/// Shared state for the subscriber endpoint
#[derive(Clone)]
pub struct AppState {
    pub subscribers: SubscriberSet,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

/// Subscribers may connect on any path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler))
        .route("/{*path}", get(handler))
        .with_state(state)
}

/// WebSocket upgrade handler
pub async fn handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    debug!("WebSocket upgrade request");

    ws.on_failed_upgrade(|e| warn!("Subscriber handshake failed: {e}"))
        .on_upgrade(move |socket| handle_socket(socket, state))
}

/// Register the upgraded socket and run it until it closes
async fn handle_socket(socket: WebSocket, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let (tx, rx) = mpsc::channel::<Message>(state.config.send_buffer_size);
    let connection_id: ConnectionId = state.subscribers.register(tx).await;

    let connection =
        WebSocketConnection::new(connection_id, state.config.clone(), state.metrics.clone());

    let result = connection.handle(socket, rx, shutdown_guard).await;

    state.subscribers.unregister(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}
