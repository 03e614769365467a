pub mod app_state;
pub mod broadcast_server;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod error;
pub mod metrics;
pub mod outbound_frame;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscriber_set;
pub mod web_socket_connection;

pub use app_state::{AppState, build_router, handler};
pub use broadcast_server::BroadcastServer;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use outbound_frame::outbound_frame;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscriber_set::SubscriberSet;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
