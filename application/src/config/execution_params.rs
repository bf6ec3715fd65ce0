//! Execution parameters for a panel run.
//!
//! [`ExecutionParams`] groups the static parameters that control how
//! [`RunPanelUseCase`](crate::use_cases::run_panel::RunPanelUseCase)
//! executes a batch. These are application-layer concerns, not domain policy.

use panel_domain::GatePolicy;
use std::time::Duration;

/// Default deadline applied to each specialist call and to synthesis.
pub const DEFAULT_TASK_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Deadline for each individual task. `None` waits indefinitely.
    pub task_timeout: Option<Duration>,
    /// Upper bound on specialists in flight. `None` starts all at once.
    pub max_concurrency: Option<usize>,
    /// What counts as present when gating synthesis.
    pub gate_policy: GatePolicy,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            task_timeout: Some(DEFAULT_TASK_TIMEOUT),
            max_concurrency: None,
            gate_policy: GatePolicy::default(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: Option<u64>) -> Self {
        self.with_task_timeout(seconds.map(Duration::from_secs))
    }

    /// A limit of zero is treated as no limit.
    pub fn with_max_concurrency(mut self, max: Option<usize>) -> Self {
        self.max_concurrency = max.filter(|n| *n > 0);
        self
    }

    pub fn with_gate_policy(mut self, policy: GatePolicy) -> Self {
        self.gate_policy = policy;
        self
    }
}
