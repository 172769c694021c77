//! Fleet Server - Web Server Entry Point
//!
//! Starts the HTTP server that handles the fleet REST API. The daily sweep
//! scheduler runs in-process alongside the server unless disabled via
//! `scheduler.enabled: false`.

use anyhow::Context;
use fleet_api::{api::create_router, config::Config, logging, scheduler, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first to get logging settings
    let config = Config::load().context("Failed to load configuration")?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = config.logging.deployment_environment,
        "Starting Fleet Server"
    );

    let addr = config
        .socket_addr()
        .context("Failed to determine socket address")?;

    let scheduler_enabled = config.scheduler.enabled;

    // Initialize application state (pool, migrations, services)
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;

    // Spawn the daily sweep scheduler if configured
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let scheduler_handle = if scheduler_enabled {
        Some(scheduler::spawn_sweep_scheduler(
            state.car_service.clone(),
            state.owner_service.clone(),
            shutdown_rx,
        ))
    } else {
        tracing::info!("Sweep scheduler disabled by configuration");
        None
    };

    let app = create_router(state);

    tracing::info!("Fleet Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {addr}"))?;

    // Run server with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server terminated unexpectedly");
    }

    // Shut down the scheduler
    if let Some(handle) = scheduler_handle {
        tracing::info!("Shutting down sweep scheduler...");
        let _ = shutdown_tx.send(true);
        if let Err(e) = handle.await {
            tracing::error!("Scheduler task join error: {}", e);
        }
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
/// Docker sends SIGTERM, while Ctrl+C sends SIGINT
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("Failed to install SIGTERM signal handler");
    let sigint = tokio::signal::ctrl_c();

    tokio::select! {
        _ = sigint => {
            tracing::info!("SIGINT received, starting graceful shutdown...");
        }
        _ = sigterm.recv() => {
            tracing::info!("SIGTERM received, starting graceful shutdown...");
        }
    }
}

/// Wait for shutdown signal (SIGINT only on non-Unix platforms)
#[cfg(not(unix))]
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
