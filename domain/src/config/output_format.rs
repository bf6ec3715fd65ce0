//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished panel run is echoed to the terminal
///
/// The report file on disk is always plain text; this only affects stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-specialist status, gate decision and output path (default)
    #[default]
    Summary,
    /// The final report text only
    Report,
    /// JSON output
    Json,
}
