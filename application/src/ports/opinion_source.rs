//! Opinion source port
//!
//! The opaque capability behind every specialist and synthesis task:
//! "given the input, produce text or fail". An error and an empty return
//! are treated the same way by the orchestration layer.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use panel_domain::{ResultSet, TaskSpec};

#[async_trait]
pub trait OpinionSource: Send + Sync {
    /// Produce one specialist's opinion of the task's input document.
    async fn opinion(&self, task: &TaskSpec) -> Result<String, GatewayError>;

    /// Combine the gated specialist opinions into one report.
    async fn synthesize(&self, inputs: &ResultSet) -> Result<String, GatewayError>;
}
