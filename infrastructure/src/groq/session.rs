//! Groq session: one system prompt bound to one model

use crate::groq::gateway::GroqEndpoint;
use crate::groq::protocol::{ChatMessage, ChatRequest, classify_status, extract_content};
use async_trait::async_trait;
use panel_application::ports::llm_gateway::{GatewayError, LlmSession};
use panel_domain::Model;
use std::sync::Arc;
use tracing::debug;

pub struct GroqSession {
    endpoint: Arc<GroqEndpoint>,
    model: Model,
    system_prompt: String,
}

impl GroqSession {
    pub(crate) fn new(endpoint: Arc<GroqEndpoint>, model: Model, system_prompt: String) -> Self {
        Self {
            endpoint,
            model,
            system_prompt,
        }
    }
}

#[async_trait]
impl LlmSession for GroqSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: self.model.to_string(),
            messages: vec![
                ChatMessage::system(self.system_prompt.as_str()),
                ChatMessage::user(content),
            ],
            temperature: self.endpoint.temperature,
        };

        debug!("Sending request to Groq: model={}", self.model);

        let response = self
            .endpoint
            .client
            .post(&self.endpoint.completions_url)
            .bearer_auth(self.endpoint.credentials.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_status(status.as_u16(), &body));
        }

        extract_content(&body)
    }
}
