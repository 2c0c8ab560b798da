use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vigil_analysis::GatewayError;
use vigil_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GatewayError`] for AI
/// gateway failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vigil_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure talking to the AI gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A required external service is not configured.
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound(what) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{what} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Gateway errors ---
            AppError::Gateway(err) => classify_gateway_error(err),

            // --- HTTP-specific errors ---
            AppError::NotConfigured(what) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NOT_CONFIGURED",
                format!("{what} not configured"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a gateway error into an HTTP status, error code, and message.
///
/// - Rate limiting and exhausted credits pass through as 429 / 402 so
///   clients can react specifically.
/// - Everything else maps to 502 with a sanitized message; the raw
///   upstream body is only logged.
fn classify_gateway_error(err: &GatewayError) -> (StatusCode, &'static str, String) {
    match err {
        GatewayError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED",
            err.to_string(),
        ),
        GatewayError::CreditsExhausted => (
            StatusCode::PAYMENT_REQUIRED,
            "CREDITS_EXHAUSTED",
            err.to_string(),
        ),
        GatewayError::Api { status, body } => {
            tracing::error!(status, body = %body, "AI gateway error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "AI analysis failed".to_string(),
            )
        }
        GatewayError::Request(e) => {
            tracing::error!(error = %e, "AI gateway request failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "AI analysis failed".to_string(),
            )
        }
        GatewayError::EmptyResponse => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_ERROR",
            err.to_string(),
        ),
    }
}
