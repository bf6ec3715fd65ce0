//! Orchestration domain - the fixed two-stage panel flow
//!
//! - [`entities`] - phases of a panel run
//! - [`value_objects`] - task specs and outcomes flowing through the executor
//! - [`result_set`] - named opinions gathered from the specialist batch
//! - [`roster`] - the validated set of tasks and required names for one run
//! - [`gate`] - decides whether synthesis may run
//! - [`report`] - final report text for every terminal state

pub mod entities;
pub mod gate;
pub mod report;
pub mod result_set;
pub mod roster;
pub mod value_objects;
