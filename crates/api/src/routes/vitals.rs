//! Route definitions for vitals monitoring endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::vitals;
use crate::state::AppState;

/// Routes mounted at `/vitals`.
///
/// ```text
/// GET  /current     -> get_current
/// GET  /history     -> get_history
/// PUT  /monitoring  -> set_monitoring
/// POST /refresh     -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(vitals::get_current))
        .route("/history", get(vitals::get_history))
        .route("/monitoring", put(vitals::set_monitoring))
        .route("/refresh", post(vitals::refresh))
}
