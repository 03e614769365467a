use sn_config::Config;
use sn_server::{Cli, ServerError, ServerState, build_router, logger, metrics, startup};
use sn_ws::ShutdownCoordinator;

use std::error::Error;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize_from_config(&config, &config_dir)?;

    info!("Starting sn-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if cli.check_config {
        info!("Configuration in {} is valid", config_dir.display());
        return Ok(());
    }

    let metrics_handle = metrics::install_recorder();

    let shutdown = ShutdownCoordinator::new();

    let broadcast_server = startup::start_broadcast(&config.broadcast, shutdown.clone()).await;
    let broadcaster = startup::broadcaster_for(broadcast_server.as_ref());
    let gateway = startup::build_gateway(&config.remote, broadcaster)?;

    let state = ServerState {
        gateway,
        broadcast_addr: broadcast_server.as_ref().map(|server| server.local_addr()),
        metrics: metrics_handle,
    };
    let app = build_router(state);

    let bind_addr = config.gateway.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::gateway_bind(&bind_addr, e))?;
    let actual_addr = listener.local_addr()?;
    info!("Gateway listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept requests");
    let mut shutdown_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown_guard.wait().await })
        .await?;

    if let Some(server) = broadcast_server {
        server.stopped().await;
    }

    info!("Graceful shutdown complete");

    Ok(())
}
