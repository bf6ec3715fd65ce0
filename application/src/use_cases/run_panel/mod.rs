//! Run Panel use case
//!
//! Orchestrates the fixed two-stage flow: the specialist batch runs in
//! parallel, the collector builds the result set, the gate decides, synthesis
//! runs at most once, and exactly one report is published.

pub mod collector;
pub mod consult;
pub mod executor;
pub mod synthesis;

use crate::config::ExecutionParams;
use crate::ports::opinion_source::OpinionSource;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::report_sink::{PublishError, ReportSink};
use crate::use_cases::publish_report::ReportPublisher;
use collector::ResultCollector;
use executor::TaskExecutor;
use panel_domain::{
    DomainError, FinalReport, GateDecision, PanelVerdict, Phase, ResultSet, Roster, SynthesisGate,
};
use serde::Serialize;
use std::sync::Arc;
use synthesis::SynthesisTask;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that abort a panel run
///
/// Individual task failures never show up here; they are absorbed into the
/// result set and the report text.
#[derive(Error, Debug)]
pub enum RunPanelError {
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] DomainError),

    #[error("Failed to publish report: {0}")]
    Publish(#[from] PublishError),
}

/// Everything a caller may want to show about a finished run
#[derive(Debug, Clone, Serialize)]
pub struct PanelRunOutput {
    /// One entry per submitted specialist
    pub results: ResultSet,
    pub verdict: PanelVerdict,
    pub report: FinalReport,
    /// Where the report was written
    pub destination: String,
}

impl PanelRunOutput {
    pub fn succeeded(&self) -> bool {
        self.report.succeeded()
    }
}

/// Use case for running the specialist panel
pub struct RunPanelUseCase<S: OpinionSource + 'static> {
    source: Arc<S>,
    sink: Arc<dyn ReportSink>,
    params: ExecutionParams,
    cancel: CancellationToken,
}

impl<S: OpinionSource + 'static> RunPanelUseCase<S> {
    pub fn new(source: Arc<S>, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            source,
            sink,
            params: ExecutionParams::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, roster: &Roster) -> Result<PanelRunOutput, RunPanelError> {
        self.execute_with_progress(roster, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        roster: &Roster,
        progress: &dyn ProgressNotifier,
    ) -> Result<PanelRunOutput, RunPanelError> {
        info!("Starting panel with {} specialists", roster.len());

        // Phase 1: every specialist in parallel, one barrier at the end
        info!("Phase 1: Specialist Consultation");
        progress.on_phase_start(Phase::Consultation, roster.len());
        let executor = TaskExecutor::new(Arc::clone(&self.source), &self.params, self.cancel.clone());
        let outcomes = executor.run_all(roster.tasks().to_vec())?;
        let results = ResultCollector::new(progress).collect(outcomes).await;
        progress.on_phase_complete(Phase::Consultation);

        // Phase 2: gate, then synthesis at most once
        let verdict = match SynthesisGate::decide(&results, roster.required(), self.params.gate_policy)
        {
            GateDecision::Blocked { missing } => {
                warn!("Synthesis blocked; missing reports: {}", missing.join(", "));
                PanelVerdict::Blocked { missing }
            }
            GateDecision::Ready { inputs } => self.phase_synthesis(&inputs, progress).await,
        };

        let report = ReportPublisher::new(self.sink.as_ref())
            .publish(&verdict)
            .await?;

        Ok(PanelRunOutput {
            results,
            verdict,
            report,
            destination: self.sink.destination(),
        })
    }

    async fn phase_synthesis(
        &self,
        inputs: &ResultSet,
        progress: &dyn ProgressNotifier,
    ) -> PanelVerdict {
        info!("Phase 2: Team Synthesis");
        progress.on_phase_start(Phase::Synthesis, 1);

        let task = SynthesisTask::new(
            Arc::clone(&self.source),
            self.params.task_timeout,
            self.cancel.clone(),
        );
        let verdict = match task.run(inputs).await {
            Ok(text) => PanelVerdict::Synthesized { text },
            Err(e) => PanelVerdict::SynthesisFailed {
                reason: e.to_string(),
            },
        };

        progress.on_task_complete(
            Phase::Synthesis,
            "MultidisciplinaryTeam",
            matches!(verdict, PanelVerdict::Synthesized { .. }),
        );
        progress.on_phase_complete(Phase::Synthesis);
        verdict
    }
}
