//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - LLM models served by the inference provider
//! - [`specialist::Specialist`] - the named roles that sit on the panel
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod specialist;
