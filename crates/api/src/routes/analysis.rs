//! Route definitions for AI analysis endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::analysis;
use crate::state::AppState;

/// Routes mounted at `/analysis`.
///
/// ```text
/// POST /skin -> analyze_skin
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/skin", post(analysis::analyze_skin))
}
