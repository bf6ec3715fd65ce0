//! Wire types for the OpenAI-compatible chat completions endpoint

use panel_application::ports::llm_gateway::GatewayError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// Pull the first choice's text out of a response body.
///
/// A `null` or missing content field yields an empty string; the caller
/// decides whether that is a failure.
pub fn extract_content(body: &str) -> Result<String, GatewayError> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        GatewayError::InvalidResponse(format!("Failed to parse response: {}, body: {}", e, body))
    })?;

    if let Some(usage) = &parsed.usage {
        tracing::debug!(
            "Token usage: prompt={}, completion={}",
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;

    if let Some(reason) = choice.finish_reason.as_deref()
        && reason != "stop"
    {
        tracing::debug!("Completion finished with reason: {}", reason);
    }

    Ok(choice.message.content.unwrap_or_default())
}

/// Map a non-success HTTP status to a gateway error.
pub fn classify_status(status: u16, body: &str) -> GatewayError {
    match status {
        401 | 403 => GatewayError::AuthenticationFailed(body.to_string()),
        429 => GatewayError::RateLimited(body.to_string()),
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, body)),
    }
}
