//! Groq LLM Gateway implementation

use crate::credentials::CredentialConfig;
use crate::groq::session::GroqSession;
use async_trait::async_trait;
use panel_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use panel_domain::Model;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

/// Connection details shared by every session
pub(crate) struct GroqEndpoint {
    pub(crate) client: Client,
    pub(crate) completions_url: String,
    pub(crate) credentials: CredentialConfig,
    pub(crate) temperature: Option<f32>,
}

/// LLM Gateway implementation for Groq's chat completions API
pub struct GroqLlmGateway {
    endpoint: Arc<GroqEndpoint>,
}

impl GroqLlmGateway {
    /// Create a gateway for `api_base` (e.g. `https://api.groq.com/openai/v1`)
    pub fn new(
        credentials: CredentialConfig,
        api_base: &str,
        temperature: Option<f32>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let completions_url = format!("{}/chat/completions", api_base.trim_end_matches('/'));
        info!(
            "GroqLlmGateway initialized for {} (key {})",
            completions_url,
            credentials.redacted()
        );

        Ok(Self {
            endpoint: Arc::new(GroqEndpoint {
                client,
                completions_url,
                credentials,
                temperature,
            }),
        })
    }

    pub fn completions_url(&self) -> &str {
        &self.endpoint.completions_url
    }
}

#[async_trait]
impl LlmGateway for GroqLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GroqSession::new(
            Arc::clone(&self.endpoint),
            model.clone(),
            system_prompt.to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> CredentialConfig {
        CredentialConfig::resolve_from(
            |var| (var == crate::credentials::API_KEY_VAR).then(|| "gsk_test".to_string()),
            &[],
        )
        .unwrap()
    }

    #[test]
    fn test_completions_url_normalizes_trailing_slash() {
        let gateway =
            GroqLlmGateway::new(credentials(), "https://api.groq.com/openai/v1/", None).unwrap();
        assert_eq!(
            gateway.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_session_carries_model() {
        let gateway =
            GroqLlmGateway::new(credentials(), "https://api.groq.com/openai/v1", Some(0.0)).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::Gemma2, "system")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gemma2);
    }
}
