//! Domain layer for specialist-panel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A run sends one shared document to a roster of specialists, collects one
//! opinion (or placeholder) per specialist, passes the result set through the
//! [`SynthesisGate`], and ends in exactly one [`FinalReport`].

pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use config::{GatePolicy, OutputFormat};
pub use core::{error::DomainError, model::Model, specialist::Specialist};
pub use orchestration::{
    entities::Phase,
    gate::{GateDecision, SynthesisGate},
    report::{
        FinalReport, MISSING_REPORTS_MESSAGE, PanelVerdict, REPORT_HEADER,
        SYNTHESIS_ERROR_MESSAGE,
    },
    result_set::{ResultSet, placeholder_text},
    roster::{RequiredNames, Roster, validate_unique},
    value_objects::{OpinionResult, TaskOutcome, TaskSpec},
};
pub use prompt::PromptTemplate;
