//! Application layer for specialist-panel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    opinion_source::OpinionSource,
    progress::{NoProgress, ProgressNotifier},
    report_sink::{PublishError, ReportSink},
};
pub use use_cases::publish_report::ReportPublisher;
pub use use_cases::run_panel::{
    PanelRunOutput, RunPanelError, RunPanelUseCase,
    collector::ResultCollector,
    consult::GatewayOpinionSource,
    executor::{OutcomeStream, TaskExecutor},
    synthesis::{SynthesisFailure, SynthesisTask},
};
