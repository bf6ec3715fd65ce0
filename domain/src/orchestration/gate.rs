//! Synthesis gate - decides whether the combined report may be produced

use super::result_set::ResultSet;
use super::roster::RequiredNames;
use crate::config::GatePolicy;
use serde::Serialize;

/// Outcome of [`SynthesisGate::decide`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// All required names are present; holds the result set restricted to them
    Ready { inputs: ResultSet },
    /// Required names that were missing, in name order
    Blocked { missing: Vec<String> },
}

impl GateDecision {
    pub fn is_ready(&self) -> bool {
        matches!(self, GateDecision::Ready { .. })
    }
}

/// Pure gating rule between the specialist batch and synthesis
pub struct SynthesisGate;

impl SynthesisGate {
    /// Blocked iff some required name is missing.
    ///
    /// Under [`GatePolicy::KeyPresence`] a name is missing only when it has no
    /// key at all. Under [`GatePolicy::RequireGenuine`] a placeholder entry
    /// is missing too.
    pub fn decide(
        result_set: &ResultSet,
        required: &RequiredNames,
        policy: GatePolicy,
    ) -> GateDecision {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| match policy {
                GatePolicy::KeyPresence => !result_set.contains(name),
                GatePolicy::RequireGenuine => {
                    !result_set.contains(name) || result_set.is_placeholder(name)
                }
            })
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            GateDecision::Ready {
                inputs: result_set.restricted_to(required.iter()),
            }
        } else {
            GateDecision::Blocked { missing }
        }
    }
}
