use crate::{
    AppState, ConnectionConfig, Metrics, Result as WsErrorResult, ShutdownCoordinator,
    SubscriberSet, WsError, build_router,
};

use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running subscriber listener.
///
/// Started once at process start; the accept loop lives in a background task
/// until the shutdown coordinator fires.
pub struct BroadcastServer {
    local_addr: SocketAddr,
    subscribers: SubscriberSet,
    accept_task: JoinHandle<()>,
}

impl BroadcastServer {
    /// Bind `bind_addr` and start accepting subscribers.
    ///
    /// Fails with [`WsError::Bind`] if the address is invalid, in use or
    /// not permitted.
    pub async fn start(
        bind_addr: &str,
        config: ConnectionConfig,
        metrics: Metrics,
        shutdown: ShutdownCoordinator,
    ) -> WsErrorResult<Self> {
        info!("Starting broadcast server on {bind_addr}");

        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| WsError::bind(bind_addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| WsError::bind(bind_addr, e))?;

        let subscribers = SubscriberSet::new(config.clone(), metrics.clone());
        let state = AppState {
            subscribers: subscribers.clone(),
            metrics,
            shutdown: shutdown.clone(),
            config,
        };
        let app = build_router(state);

        let mut shutdown_guard = shutdown.subscribe_guard();
        let accept_task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown_guard.wait().await })
                .await;

            match result {
                Ok(()) => info!("Broadcast server on {local_addr} stopped"),
                Err(e) => error!("Broadcast server on {local_addr} failed: {e}"),
            }
        });

        info!("Broadcast server listening on {local_addr}");

        Ok(Self {
            local_addr,
            subscribers,
            accept_task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Handle to the live subscriber set, for broadcasting
    pub fn subscribers(&self) -> &SubscriberSet {
        &self.subscribers
    }

    /// Wait for the accept loop to finish after shutdown was triggered
    pub async fn stopped(self) {
        if let Err(e) = self.accept_task.await {
            error!("Broadcast accept task ended abnormally: {e}");
        }
    }
}
