use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil_analysis::{GatewayClient, GatewayConfig};
use vigil_api::config::ServerConfig;
use vigil_api::router::build_app_router;
use vigil_api::state::AppState;
use vigil_events::EventBus;
use vigil_monitor::{MonitorConfig, VitalsMonitor};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // Spawn the event logger (writes all monitor events to the log).
    let logger_cancel = CancellationToken::new();
    let logger_handle = tokio::spawn(log_events(event_bus.subscribe(), logger_cancel.clone()));

    // --- Vitals monitor ---
    let monitor = VitalsMonitor::start(
        MonitorConfig {
            interval: config.vitals_interval,
            seed: None,
            start_enabled: true,
        },
        Arc::clone(&event_bus),
    );
    tracing::info!(
        interval_ms = config.vitals_interval.as_millis() as u64,
        "Vitals monitor started"
    );

    // --- AI gateway ---
    let gateway = config.gateway_api_key.as_ref().map(|key| {
        Arc::new(GatewayClient::new(GatewayConfig {
            base_url: config.gateway_url.clone(),
            api_key: key.clone(),
            model: config.gateway_model.clone(),
        }))
    });
    if gateway.is_none() {
        tracing::warn!("AI_GATEWAY_API_KEY not set -- analysis endpoints will return errors");
    }

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        monitor: Arc::clone(&monitor),
        event_bus: Arc::clone(&event_bus),
        gateway,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    monitor.shutdown();
    tracing::info!("Vitals monitor stopped");

    logger_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), logger_handle).await;
    tracing::info!("Event logger stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Log every monitor event until cancelled.
async fn log_events(
    mut rx: tokio::sync::broadcast::Receiver<vigil_events::MonitorEvent>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = rx.recv() => {
                match event {
                    Ok(event) => {
                        tracing::debug!(
                            event_type = %event.event_type,
                            payload = %event.payload,
                            "Monitor event"
                        );
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Event logger lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
