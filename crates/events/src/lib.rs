//! In-process monitor event types and bus.

pub mod bus;

pub use bus::{EventBus, MonitorEvent};
