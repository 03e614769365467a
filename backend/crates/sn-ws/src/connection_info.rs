use crate::ConnectionId;

use axum::extract::ws::Message;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// A live subscriber as seen by the broadcast side.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    /// Feeds the connection's writer task; closed once the writer is gone
    pub sender: mpsc::Sender<Message>,
}
