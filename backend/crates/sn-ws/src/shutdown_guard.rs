use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Lets an async task wait for the coordinator's shutdown signal
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Resolves once shutdown is triggered, or immediately if it already was.
    /// A dropped coordinator counts as shutdown.
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.wait_for(|stopped| *stopped).await;
    }

    pub fn is_triggered(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
