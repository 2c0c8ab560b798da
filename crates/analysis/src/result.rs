//! Typed analysis results and model-output parsing.
//!
//! The AI gateway returns the assessment as free-form chat content that
//! is *supposed* to be a JSON object, often wrapped in a markdown code
//! fence. [`parse_content`] extracts and validates it, degrading to a
//! conservative fallback when the model misbehaves — a malformed answer
//! must never surface as an error to the caller.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Risk classification attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A validated skin-analysis result.
///
/// Serialized camelCase to match the wire format consumed by clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Brief description of the observed condition.
    pub skin_condition: String,
    /// Model confidence, clamped to 60–95.
    pub confidence: i32,
    pub risk_level: RiskLevel,
    /// At most five recommendations.
    pub recommendations: Vec<String>,
    pub details: String,
}

const MIN_CONFIDENCE: i32 = 60;
const MAX_CONFIDENCE: i32 = 95;
const DEFAULT_CONFIDENCE: i32 = 70;
const MAX_RECOMMENDATIONS: usize = 5;

/// How much of the raw model output to keep when falling back.
const FALLBACK_DETAIL_CHARS: usize = 200;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("valid regex"));

/// Parse the model's chat content into a validated [`AnalysisResult`].
///
/// Strips an optional markdown code fence, parses the JSON, and
/// sanitizes each field independently: one malformed field never
/// discards the rest of a valid answer. A content string that cannot
/// be parsed at all yields a fixed conservative result carrying a
/// truncated echo of the raw content in `details`.
pub fn parse_content(content: &str) -> AnalysisResult {
    let json_str = CODE_FENCE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| content.trim());

    match serde_json::from_str::<serde_json::Value>(json_str) {
        Ok(raw) => sanitize(&raw),
        Err(e) => {
            tracing::warn!(error = %e, "Model answer was not valid JSON, using fallback result");
            fallback(content)
        }
    }
}

/// Apply per-field defaults and clamps to a raw model answer.
fn sanitize(raw: &serde_json::Value) -> AnalysisResult {
    let confidence = raw
        .get("confidence")
        .and_then(serde_json::Value::as_f64)
        .map(|c| c.round() as i32)
        .filter(|&c| c != 0)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let risk_level = match raw.get("riskLevel").and_then(serde_json::Value::as_str) {
        Some("low") => RiskLevel::Low,
        Some("medium") => RiskLevel::Medium,
        Some("high") => RiskLevel::High,
        _ => RiskLevel::Low,
    };

    let recommendations = match raw
        .get("recommendations")
        .and_then(serde_json::Value::as_array)
    {
        Some(items) => items
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(String::from)
            .take(MAX_RECOMMENDATIONS)
            .collect(),
        None => vec!["Consult a healthcare professional for proper diagnosis".to_string()],
    };

    let skin_condition = raw
        .get("skinCondition")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unable to determine")
        .to_string();

    let details = raw
        .get("details")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("Analysis completed. Please consult a dermatologist for professional evaluation.")
        .to_string();

    AnalysisResult {
        skin_condition,
        confidence,
        risk_level,
        recommendations,
        details,
    }
}

/// Conservative result used when the model answer cannot be parsed.
fn fallback(content: &str) -> AnalysisResult {
    let details: String = content.chars().take(FALLBACK_DETAIL_CHARS).collect();
    AnalysisResult {
        skin_condition: "Analysis completed".to_string(),
        confidence: DEFAULT_CONFIDENCE,
        risk_level: RiskLevel::Low,
        recommendations: vec![
            "Consult a dermatologist for professional evaluation".to_string(),
            "Maintain regular skin health monitoring".to_string(),
            "Use appropriate sun protection".to_string(),
        ],
        details,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
