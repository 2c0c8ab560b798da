use std::sync::Arc;

use vigil_analysis::GatewayClient;
use vigil_events::EventBus;
use vigil_monitor::VitalsMonitor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The running vitals monitor.
    pub monitor: Arc<VitalsMonitor>,
    /// Centralized event bus for monitor events.
    pub event_bus: Arc<EventBus>,
    /// AI gateway client; `None` when no API key is configured.
    pub gateway: Option<Arc<GatewayClient>>,
}
