//! Named opinions collected from one specialist batch

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Text stored in place of an opinion the specialist could not produce.
pub fn placeholder_text(task_name: &str) -> String {
    format!("Error: {} report could not be generated.", task_name)
}

/// Mapping from task name to opinion text
///
/// Placeholder entries are tracked separately so callers can tell a degraded
/// result apart from a genuine one without string matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    entries: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    placeholders: BTreeSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a genuine opinion, replacing any placeholder for the same name.
    pub fn insert_opinion(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        self.placeholders.remove(&name);
        self.entries.insert(name, text.into());
    }

    /// Stores the deterministic placeholder for `name`.
    pub fn insert_placeholder(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.entries.insert(name.clone(), placeholder_text(&name));
        self.placeholders.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn is_placeholder(&self, name: &str) -> bool {
        self.placeholders.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.placeholders.iter().map(String::as_str)
    }

    /// Iterates `(name, text)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Returns a copy holding only the entries whose names are in `names`.
    pub fn restricted_to<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> ResultSet {
        let mut restricted = ResultSet::new();
        for name in names {
            if let Some(text) = self.entries.get(name) {
                restricted.entries.insert(name.to_string(), text.clone());
                if self.placeholders.contains(name) {
                    restricted.placeholders.insert(name.to_string());
                }
            }
        }
        restricted
    }
}
