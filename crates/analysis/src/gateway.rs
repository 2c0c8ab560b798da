//! REST client for the upstream AI gateway.
//!
//! Wraps the gateway's OpenAI-compatible `/v1/chat/completions` endpoint
//! using [`reqwest`]: submits the image alongside a fixed dermatology
//! system prompt and extracts the assistant's answer text.

use serde::Deserialize;

use crate::result::{parse_content, AnalysisResult};

/// System prompt instructing the model to answer with a structured
/// JSON assessment. Mirrors the screening-only framing shown to users.
const SYSTEM_PROMPT: &str = r#"You are a medical AI assistant specializing in dermatological analysis. Analyze the provided skin image and provide a structured assessment.

IMPORTANT: This is for educational and screening purposes only. Always recommend consulting a healthcare professional for proper diagnosis.

Analyze the image and respond with a JSON object in this exact format:
{
  "skinCondition": "Brief description of what you observe (e.g., 'Healthy skin appearance', 'Possible eczema pattern', 'Minor skin irritation')",
  "confidence": <number between 60-95>,
  "riskLevel": "low" | "medium" | "high",
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"],
  "details": "A 2-3 sentence detailed explanation of your observations and reasoning"
}

Guidelines:
- Be conservative in assessments - when in doubt, recommend professional consultation
- Focus on visible patterns, texture, color variations, and any anomalies
- Always include a recommendation to see a dermatologist for concerning findings
- If the image is not of skin or is unclear, set riskLevel to "low" and explain in details"#;

/// User-turn text accompanying the image.
const USER_PROMPT: &str =
    "Please analyze this skin image and provide your assessment in the specified JSON format.";

/// Configuration for the AI gateway connection.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://ai.gateway.example.dev`.
    pub base_url: String,
    /// Bearer token for the gateway.
    pub api_key: String,
    /// Model identifier passed through to the gateway.
    pub model: String,
}

/// Errors from the AI gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway rejected the request due to rate limiting (429).
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The gateway account has no remaining credits (402).
    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,

    /// Any other non-2xx status from the gateway.
    #[error("AI gateway error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The gateway answered 2xx but the response carried no content.
    #[error("No analysis result from AI")]
    EmptyResponse,
}

/// Minimal shape of the chat-completions response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// HTTP client for a single AI gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Submit a base64-encoded image for analysis.
    ///
    /// Accepts either a full data URL or bare base64 (a
    /// `data:image/jpeg;base64,` prefix is added). Returns the sanitized
    /// [`AnalysisResult`] extracted from the model's answer.
    pub async fn analyze_image(&self, image_base64: &str) -> Result<AnalysisResult, GatewayError> {
        let image_url = if image_base64.starts_with("data:") {
            image_base64.to_string()
        } else {
            format!("data:image/jpeg;base64,{image_base64}")
        };

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": USER_PROMPT },
                        { "type": "image_url", "image_url": { "url": image_url } }
                    ]
                }
            ],
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => GatewayError::RateLimited,
                402 => GatewayError::CreditsExhausted,
                code => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<unreadable body>".to_string());
                    GatewayError::Api { status: code, body }
                }
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GatewayError::EmptyResponse)?;

        tracing::debug!(
            preview = %content.chars().take(200).collect::<String>(),
            "AI response received"
        );

        Ok(parse_content(&content))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_response_extracts_first_choice_content() {
        let json = r#"{"choices":[{"message":{"content":"{\"skinCondition\":\"ok\"}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap();
        assert_eq!(content, "{\"skinCondition\":\"ok\"}");
    }

    #[test]
    fn chat_response_without_choices_parses_to_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn chat_response_with_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
