//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod gate_policy;
mod output_format;

pub use gate_policy::GatePolicy;
pub use output_format::OutputFormat;
