//! Periodic vitals sampling loop.
//!
//! [`VitalsMonitor`] owns the generator, the bounded history, and a
//! single tokio task ticking at a fixed interval. Each tick regenerates
//! a [`VitalSigns`] snapshot, classifies it, appends it to the trailing
//! history, and publishes events on the shared [`EventBus`].
//!
//! There is exactly one writer (the tick task, plus explicit
//! [`refresh`](VitalsMonitor::refresh) calls); handlers only read.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use vigil_core::history::{TimestampedVitals, VitalsHistory};
use vigil_core::simulator::VitalsGenerator;
use vigil_core::vitals::{classify, HealthStatus};
use vigil_events::{EventBus, MonitorEvent};

/// Default interval between samples.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Configuration for the sampling loop.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between samples.
    pub interval: Duration,
    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Whether periodic sampling starts enabled.
    pub start_enabled: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            seed: None,
            start_enabled: true,
        }
    }
}

/// Mutable monitor state guarded by a single lock.
struct MonitorState {
    generator: VitalsGenerator,
    history: VitalsHistory,
    /// When `false`, ticks are skipped but the task stays alive.
    monitoring: bool,
    /// Overall status of the previous sample, for change detection.
    last_overall: Option<HealthStatus>,
}

/// Periodic vitals monitor.
///
/// Created once via [`VitalsMonitor::start`]. The returned `Arc` can be
/// cheaply cloned into request handlers.
pub struct VitalsMonitor {
    state: RwLock<MonitorState>,
    bus: Arc<EventBus>,
    /// Cancelled during shutdown; stops the tick task.
    cancel: CancellationToken,
}

impl VitalsMonitor {
    /// Spawn the sampling task and return a shared handle.
    ///
    /// When sampling starts enabled, the first sample is taken on the
    /// first tick, which `tokio::time::interval` fires immediately.
    pub fn start(config: MonitorConfig, bus: Arc<EventBus>) -> Arc<Self> {
        let generator = match config.seed {
            Some(seed) => VitalsGenerator::from_seed(seed),
            None => VitalsGenerator::new(),
        };

        let monitor = Arc::new(Self {
            state: RwLock::new(MonitorState {
                generator,
                history: VitalsHistory::new(),
                monitoring: config.start_enabled,
                last_overall: None,
            }),
            bus,
            cancel: CancellationToken::new(),
        });

        if config.start_enabled {
            monitor
                .bus
                .publish(MonitorEvent::new("monitor.started").with_payload(serde_json::json!({
                    "interval_ms": config.interval.as_millis() as u64,
                })));
        }

        tokio::spawn(run_loop(Arc::clone(&monitor), config.interval));
        monitor
    }

    /// The most recent sample, if one has been taken.
    pub async fn latest(&self) -> Option<TimestampedVitals> {
        self.state.read().await.history.latest().copied()
    }

    /// The trailing history, oldest first (at most 20 samples).
    pub async fn history(&self) -> Vec<TimestampedVitals> {
        self.state.read().await.history.snapshot()
    }

    /// Whether periodic sampling is currently enabled.
    pub async fn is_monitoring(&self) -> bool {
        self.state.read().await.monitoring
    }

    /// Pause or resume periodic sampling without killing the task.
    pub async fn set_monitoring(&self, enabled: bool) {
        let changed = {
            let mut state = self.state.write().await;
            let changed = state.monitoring != enabled;
            state.monitoring = enabled;
            changed
        };

        if changed {
            let event_type = if enabled {
                "monitor.started"
            } else {
                "monitor.stopped"
            };
            tracing::info!(enabled, "Monitoring toggled");
            self.bus.publish(MonitorEvent::new(event_type));
        }
    }

    /// Take an immediate out-of-band sample, regardless of the
    /// monitoring flag, and return it.
    pub async fn refresh(&self) -> TimestampedVitals {
        self.sample().await
    }

    /// Stop the tick task. Idempotent.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Generate, classify, record, and publish one sample.
    async fn sample(&self) -> TimestampedVitals {
        let (sample, status_change) = {
            let mut state = self.state.write().await;
            let vitals = state.generator.generate();
            let status = classify(&vitals);
            let sample = TimestampedVitals {
                vitals,
                status,
                recorded_at: chrono::Utc::now(),
            };
            state.history.push(sample);

            let change = match state.last_overall {
                Some(previous) if previous != status.overall => Some((previous, status.overall)),
                _ => None,
            };
            state.last_overall = Some(status.overall);
            (sample, change)
        };

        self.bus.publish(
            MonitorEvent::new("vitals.sample")
                .with_payload(serde_json::to_value(&sample).unwrap_or_default()),
        );

        if let Some((from, to)) = status_change {
            tracing::info!(?from, ?to, "Overall status changed");
            self.bus.publish(
                MonitorEvent::new("vitals.status_changed").with_payload(serde_json::json!({
                    "from": from,
                    "to": to,
                })),
            );
        }

        sample
    }
}

/// Drive the periodic sampling until cancelled.
async fn run_loop(monitor: Arc<VitalsMonitor>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = monitor.cancel.cancelled() => {
                tracing::info!("Vitals monitor stopping");
                break;
            }
            _ = ticker.tick() => {
                if monitor.is_monitoring().await {
                    monitor.sample().await;
                }
            }
        }
    }
}
