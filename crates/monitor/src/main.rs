//! `vigil-monitor` -- standalone vitals simulation daemon.
//!
//! Runs the periodic sampling loop without the HTTP server and logs
//! every sample and status transition. Useful for smoke-testing the
//! simulator and classifier from a terminal.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default | Description                        |
//! |----------------------|----------|---------|------------------------------------|
//! | `VITALS_INTERVAL_MS` | no       | `3000`  | Milliseconds between samples       |
//! | `VITALS_SEED`        | no       | --      | Fixed RNG seed (deterministic run) |

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil_events::EventBus;
use vigil_monitor::{MonitorConfig, VitalsMonitor};

/// Default interval between samples, in milliseconds.
const DEFAULT_INTERVAL_MS: u64 = 3000;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let interval_ms: u64 = std::env::var("VITALS_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_MS);

    let seed: Option<u64> = std::env::var("VITALS_SEED")
        .ok()
        .and_then(|v| v.parse().ok());

    tracing::info!(interval_ms, ?seed, "Starting vigil-monitor");

    let bus = Arc::new(EventBus::default());
    let mut events = bus.subscribe();

    let config = MonitorConfig {
        interval: Duration::from_millis(interval_ms),
        seed,
        start_enabled: true,
    };
    let monitor = VitalsMonitor::start(config, Arc::clone(&bus));

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                }
                break;
            }
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        tracing::info!(
                            event_type = %event.event_type,
                            payload = %event.payload,
                            "Monitor event"
                        );
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Event stream lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::info!("Shutting down");
    monitor.shutdown();
}
