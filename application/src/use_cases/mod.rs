//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod publish_report;
pub mod run_panel;
pub(crate) mod shared;
