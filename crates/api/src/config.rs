use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Interval between vitals samples (default: 3000 ms).
    pub vitals_interval: Duration,
    /// Base URL of the AI gateway.
    pub gateway_url: String,
    /// Bearer token for the AI gateway. Analysis endpoints return an
    /// error when unset.
    pub gateway_api_key: Option<String>,
    /// Model identifier passed to the AI gateway.
    pub gateway_model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `VITALS_INTERVAL_MS`   | `3000`                           |
    /// | `AI_GATEWAY_URL`       | `https://ai.gateway.lovable.dev` |
    /// | `AI_GATEWAY_API_KEY`   | (unset)                          |
    /// | `AI_GATEWAY_MODEL`     | `google/gemini-2.5-flash`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let vitals_interval_ms: u64 = std::env::var("VITALS_INTERVAL_MS")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("VITALS_INTERVAL_MS must be a valid u64");

        let gateway_url = std::env::var("AI_GATEWAY_URL")
            .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".into());

        let gateway_api_key = std::env::var("AI_GATEWAY_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let gateway_model =
            std::env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| "google/gemini-2.5-flash".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            vitals_interval: Duration::from_millis(vitals_interval_ms),
            gateway_url,
            gateway_api_key,
            gateway_model,
        }
    }
}
