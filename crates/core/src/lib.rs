//! Domain logic for the vigil vitals monitoring service.
//!
//! All logic in this crate is pure (no I/O, no async) so it can be
//! tested in isolation. The sampling loop lives in `vigil-monitor`,
//! the HTTP surface in `vigil-api`.

pub mod error;
pub mod history;
pub mod simulator;
pub mod types;
pub mod vitals;
