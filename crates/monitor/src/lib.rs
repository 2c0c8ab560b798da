//! `vigil-monitor` library crate.
//!
//! Hosts the periodic vitals sampling loop. The binary entrypoint
//! (standalone daemon) lives in `main.rs`; the API server embeds
//! [`VitalsMonitor`](sampler::VitalsMonitor) directly.

pub mod sampler;

pub use sampler::{MonitorConfig, VitalsMonitor};
