//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// Phase of a panel run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Every specialist reads the document in parallel
    Consultation,
    /// One combined report is produced from all opinions
    Synthesis,
}

impl Phase {
    pub fn display_name(&self) -> &str {
        match self {
            Phase::Consultation => "Specialist Consultation",
            Phase::Synthesis => "Team Synthesis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
