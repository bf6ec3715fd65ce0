//! Application-level configuration.
//!
//! - [`ExecutionParams`] - deadlines, concurrency and gating for a panel run

pub mod execution_params;

pub use execution_params::ExecutionParams;
