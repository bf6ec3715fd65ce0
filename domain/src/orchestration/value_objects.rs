//! Orchestration value objects - immutable task inputs and outcomes.
//!
//! - [`TaskSpec`] - one named unit of work over the shared document
//! - [`TaskOutcome`] - what the executor reports for exactly one task
//! - [`OpinionResult`] - opinion text or a failure marker

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named specialist task over the shared input document
///
/// The document is reference-counted so every task in a batch shares the
/// same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    name: String,
    input_document: Arc<str>,
}

impl TaskSpec {
    /// Creates a task spec, rejecting empty (or whitespace-only) names.
    pub fn new(
        name: impl Into<String>,
        input_document: impl Into<Arc<str>>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyTaskName);
        }
        Ok(Self {
            name,
            input_document: input_document.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_document(&self) -> &str {
        &self.input_document
    }
}

/// Result carried by a [`TaskOutcome`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum OpinionResult {
    /// Non-empty opinion text
    Opinion(String),
    /// The task errored, returned nothing, timed out or was cancelled
    Failed(String),
}

/// Outcome of a single specialist task, produced exactly once per task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub task_name: String,
    pub result: OpinionResult,
}

impl TaskOutcome {
    /// Wraps returned text; empty or whitespace-only text becomes a failure.
    pub fn from_text(task_name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let result = if text.trim().is_empty() {
            OpinionResult::Failed("empty response".to_string())
        } else {
            OpinionResult::Opinion(text)
        };
        Self {
            task_name: task_name.into(),
            result,
        }
    }

    pub fn failed(task_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            result: OpinionResult::Failed(reason.into()),
        }
    }

    /// Returns the opinion text if the task produced usable output.
    pub fn opinion(&self) -> Option<&str> {
        match &self.result {
            OpinionResult::Opinion(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.opinion().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_spec_rejects_blank_name() {
        assert_eq!(
            TaskSpec::new("   ", "doc").unwrap_err(),
            DomainError::EmptyTaskName
        );
    }

    #[test]
    fn test_task_spec_shares_document() {
        let doc: Arc<str> = Arc::from("patient notes");
        let a = TaskSpec::new("A", Arc::clone(&doc)).unwrap();
        let b = TaskSpec::new("B", Arc::clone(&doc)).unwrap();
        assert_eq!(a.input_document(), b.input_document());
        assert_eq!(Arc::strong_count(&doc), 3);
    }

    #[test]
    fn test_empty_text_becomes_failure() {
        let outcome = TaskOutcome::from_text("Cardiologist", "  \n");
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.result,
            OpinionResult::Failed("empty response".to_string())
        );
    }

    #[test]
    fn test_text_becomes_opinion() {
        let outcome = TaskOutcome::from_text("Cardiologist", "Normal sinus rhythm");
        assert_eq!(outcome.opinion(), Some("Normal sinus rhythm"));
    }
}
