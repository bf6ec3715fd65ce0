//! Synthesis task - the single dependent step after the specialist batch

use crate::ports::llm_gateway::GatewayError;
use crate::ports::opinion_source::OpinionSource;
use crate::use_cases::shared::guarded_call;
use panel_domain::ResultSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Why synthesis produced no report
#[derive(Error, Debug)]
pub enum SynthesisFailure {
    #[error("synthesis returned an empty report")]
    Empty,

    #[error("synthesis call failed: {0}")]
    Gateway(#[from] GatewayError),
}

pub struct SynthesisTask<S: OpinionSource + 'static> {
    source: Arc<S>,
    deadline: Option<Duration>,
    cancel: CancellationToken,
}

impl<S: OpinionSource + 'static> SynthesisTask<S> {
    pub fn new(source: Arc<S>, deadline: Option<Duration>, cancel: CancellationToken) -> Self {
        Self {
            source,
            deadline,
            cancel,
        }
    }

    /// Combine every gated opinion into one report.
    ///
    /// Takes `self` so a task instance can run at most once.
    pub async fn run(self, inputs: &ResultSet) -> Result<String, SynthesisFailure> {
        info!("Synthesizing {} specialist reports", inputs.len());
        let text = guarded_call(self.source.synthesize(inputs), self.deadline, &self.cancel)
            .await
            .inspect_err(|e| warn!("Synthesis call failed: {}", e))?;

        if text.trim().is_empty() {
            warn!("Synthesis returned an empty report");
            return Err(SynthesisFailure::Empty);
        }
        Ok(text)
    }
}
