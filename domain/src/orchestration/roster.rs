//! The validated task roster for one panel run

use super::value_objects::TaskSpec;
use crate::core::error::DomainError;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Names that must all be present before synthesis may run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredNames(BTreeSet<String>);

impl RequiredNames {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Task specs for one run plus the names required for synthesis
///
/// Invariants: at least one task, names unique and non-empty, required
/// names a subset of the task names.
#[derive(Debug, Clone)]
pub struct Roster {
    tasks: Vec<TaskSpec>,
    required: RequiredNames,
}

impl Roster {
    /// Builds a roster where every submitted name is required.
    pub fn new<I, S>(names: I, input_document: impl Into<Arc<str>>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document: Arc<str> = input_document.into();
        let tasks = names
            .into_iter()
            .map(|name| TaskSpec::new(name, Arc::clone(&document)))
            .collect::<Result<Vec<_>, _>>()?;

        validate_unique(&tasks)?;

        let required = RequiredNames(tasks.iter().map(|t| t.name().to_string()).collect());
        Ok(Self { tasks, required })
    }

    /// Narrows the required set. Every name must belong to the roster.
    pub fn with_required<I, S>(mut self, names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut required = BTreeSet::new();
        for name in names {
            let name = name.into();
            if !self.tasks.iter().any(|t| t.name() == name) {
                return Err(DomainError::UnknownRequiredName(name));
            }
            required.insert(name);
        }
        self.required = RequiredNames(required);
        Ok(self)
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    pub fn required(&self) -> &RequiredNames {
        &self.required
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Rejects an empty batch or repeated task names.
pub fn validate_unique(tasks: &[TaskSpec]) -> Result<(), DomainError> {
    if tasks.is_empty() {
        return Err(DomainError::NoSpecialists);
    }
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.name()) {
            return Err(DomainError::DuplicateTaskName(task.name().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_requires_all_names_by_default() {
        let roster = Roster::new(["Cardiologist", "Psychologist"], "doc").unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.required().contains("Cardiologist"));
        assert!(roster.required().contains("Psychologist"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Roster::new(["A", "B", "A"], "doc").unwrap_err();
        assert_eq!(err, DomainError::DuplicateTaskName("A".to_string()));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = Roster::new(Vec::<String>::new(), "doc").unwrap_err();
        assert_eq!(err, DomainError::NoSpecialists);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Roster::new(["A", ""], "doc").unwrap_err();
        assert_eq!(err, DomainError::EmptyTaskName);
    }

    #[test]
    fn test_required_must_be_subset() {
        let roster = Roster::new(["A", "B"], "doc").unwrap();
        let err = roster.clone().with_required(["C"]).unwrap_err();
        assert_eq!(err, DomainError::UnknownRequiredName("C".to_string()));

        let narrowed = roster.with_required(["B"]).unwrap();
        assert_eq!(narrowed.required().iter().collect::<Vec<_>>(), vec!["B"]);
    }
}
