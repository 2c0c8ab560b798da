//! Handlers for AI skin-analysis endpoints.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use vigil_analysis::AnalysisResult;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the skin analysis endpoint.
///
/// `image_base64` accepts either a full data URL or bare base64.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub image_base64: String,
}

/// POST /analysis/skin
///
/// Forwards the image to the AI gateway and returns the sanitized
/// assessment. Rate limiting (429) and exhausted credits (402) pass
/// through to the client; other upstream failures surface as 502.
pub async fn analyze_skin(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<DataResponse<AnalysisResult>>> {
    if input.image_base64.trim().is_empty() {
        return Err(AppError::BadRequest("No image provided".to_string()));
    }

    let gateway = state
        .gateway
        .as_ref()
        .ok_or(AppError::NotConfigured("AI service"))?;

    tracing::info!("Starting skin condition analysis");
    let result = gateway.analyze_image(&input.image_base64).await?;

    tracing::info!(condition = %result.skin_condition, "Analysis complete");
    Ok(Json(DataResponse { data: result }))
}
