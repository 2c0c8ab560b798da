pub mod analysis;
pub mod health;
pub mod vitals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vitals/current       latest sample + status (GET)
/// /vitals/history       trailing samples, oldest first (GET)
/// /vitals/monitoring    pause/resume sampling (PUT)
/// /vitals/refresh       force an immediate sample (POST)
///
/// /analysis/skin        AI skin-image analysis (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vitals", vitals::router())
        .nest("/analysis", analysis::router())
}
