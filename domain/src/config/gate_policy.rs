//! Gate policy value object

use serde::{Deserialize, Serialize};

/// Decides what counts as "present" when gating the synthesis step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// A key in the result set is enough, placeholders included (default)
    #[default]
    KeyPresence,
    /// Placeholder entries count as missing and block synthesis
    RequireGenuine,
}

impl GatePolicy {
    pub fn as_str(&self) -> &str {
        match self {
            GatePolicy::KeyPresence => "key_presence",
            GatePolicy::RequireGenuine => "require_genuine",
        }
    }
}

impl std::fmt::Display for GatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
