//! AI skin-analysis client library.
//!
//! Wraps the upstream AI gateway's chat-completions endpoint for image
//! analysis and provides typed parsing and sanitization of the model's
//! free-form JSON answers.

pub mod gateway;
pub mod result;

pub use gateway::{GatewayClient, GatewayConfig, GatewayError};
pub use result::{parse_content, AnalysisResult, RiskLevel};
