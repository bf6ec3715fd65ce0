//! Default opinion source backed by the LLM gateway

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::opinion_source::OpinionSource;
use async_trait::async_trait;
use panel_domain::{Model, PromptTemplate, ResultSet, Specialist, TaskSpec};
use std::sync::Arc;
use tracing::debug;

/// Builds specialist and team prompts and sends them through an [`LlmGateway`]
pub struct GatewayOpinionSource<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    specialist_model: Model,
    synthesis_model: Model,
}

impl<G: LlmGateway + 'static> GatewayOpinionSource<G> {
    pub fn new(gateway: Arc<G>, specialist_model: Model, synthesis_model: Model) -> Self {
        Self {
            gateway,
            specialist_model,
            synthesis_model,
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> OpinionSource for GatewayOpinionSource<G> {
    async fn opinion(&self, task: &TaskSpec) -> Result<String, GatewayError> {
        let specialist = Specialist::from(task.name());
        debug!(
            "Consulting {} with model {}",
            specialist, self.specialist_model
        );

        let session = self
            .gateway
            .create_session_with_system_prompt(
                &self.specialist_model,
                &PromptTemplate::specialist_system(&specialist),
            )
            .await?;
        session
            .send(&PromptTemplate::specialist_prompt(task.input_document()))
            .await
    }

    async fn synthesize(&self, inputs: &ResultSet) -> Result<String, GatewayError> {
        debug!("Running team synthesis with model {}", self.synthesis_model);

        let session = self
            .gateway
            .create_session_with_system_prompt(&self.synthesis_model, PromptTemplate::team_system())
            .await?;
        session.send(&PromptTemplate::team_prompt(inputs.iter())).await
    }
}
