//! Handlers for vitals monitoring endpoints.
//!
//! All reads go through the shared [`VitalsMonitor`] handle; the tick
//! task is the only periodic writer.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use vigil_core::error::CoreError;
use vigil_core::history::TimestampedVitals;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the monitoring toggle endpoint.
#[derive(Debug, Deserialize)]
pub struct MonitoringRequest {
    pub enabled: bool,
}

/// Response body for the monitoring toggle endpoint.
#[derive(Debug, Serialize)]
pub struct MonitoringResponse {
    pub monitoring: bool,
}

/// GET /vitals/current
///
/// The latest sample with its classification. 404 until the first
/// tick has fired.
pub async fn get_current(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TimestampedVitals>>> {
    let sample = state
        .monitor
        .latest()
        .await
        .ok_or(CoreError::NotFound("vitals sample"))?;
    Ok(Json(DataResponse { data: sample }))
}

/// GET /vitals/history
///
/// Up to 20 trailing samples, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TimestampedVitals>>>> {
    let samples = state.monitor.history().await;
    Ok(Json(DataResponse { data: samples }))
}

/// PUT /vitals/monitoring
///
/// Pause or resume periodic sampling.
pub async fn set_monitoring(
    State(state): State<AppState>,
    Json(input): Json<MonitoringRequest>,
) -> AppResult<Json<DataResponse<MonitoringResponse>>> {
    state.monitor.set_monitoring(input.enabled).await;
    Ok(Json(DataResponse {
        data: MonitoringResponse {
            monitoring: input.enabled,
        },
    }))
}

/// POST /vitals/refresh
///
/// Force an immediate out-of-band sample and return it.
pub async fn refresh(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TimestampedVitals>>> {
    let sample = state.monitor.refresh().await;
    Ok(Json(DataResponse { data: sample }))
}
