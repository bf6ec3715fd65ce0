//! Final report text for every terminal state of a run

use serde::Serialize;

/// Header placed in front of every final report.
pub const REPORT_HEADER: &str = "### Final Diagnosis:\n\n";

/// Body used when required specialist reports were missing.
pub const MISSING_REPORTS_MESSAGE: &str =
    "Failed to generate final diagnosis due to missing individual agent reports.";

/// Body used when synthesis itself failed.
pub const SYNTHESIS_ERROR_MESSAGE: &str =
    "Failed to generate a comprehensive diagnosis due to an internal error.";

/// How the run ended, as handed to the publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelVerdict {
    /// Synthesis produced a combined report
    Synthesized { text: String },
    /// The gate blocked synthesis
    Blocked { missing: Vec<String> },
    /// Synthesis ran and failed
    SynthesisFailed { reason: String },
}

/// The single artifact written at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    text: String,
    succeeded: bool,
}

impl FinalReport {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }
}

impl From<&PanelVerdict> for FinalReport {
    fn from(verdict: &PanelVerdict) -> Self {
        match verdict {
            PanelVerdict::Synthesized { text } => Self {
                text: format!("{}{}", REPORT_HEADER, text),
                succeeded: true,
            },
            PanelVerdict::Blocked { .. } => Self {
                text: format!("{}{}", REPORT_HEADER, MISSING_REPORTS_MESSAGE),
                succeeded: false,
            },
            PanelVerdict::SynthesisFailed { .. } => Self {
                text: format!("{}{}", REPORT_HEADER, SYNTHESIS_ERROR_MESSAGE),
                succeeded: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_report_is_prefixed() {
        let report = FinalReport::from(&PanelVerdict::Synthesized {
            text: "Y".to_string(),
        });
        assert_eq!(report.text(), "### Final Diagnosis:\n\nY");
        assert!(report.succeeded());
    }

    #[test]
    fn test_blocked_report_text() {
        let report = FinalReport::from(&PanelVerdict::Blocked {
            missing: vec!["Psychologist".to_string()],
        });
        assert_eq!(
            report.text(),
            "### Final Diagnosis:\n\nFailed to generate final diagnosis due to missing individual agent reports."
        );
        assert!(!report.succeeded());
    }

    #[test]
    fn test_synthesis_failure_report_text() {
        let report = FinalReport::from(&PanelVerdict::SynthesisFailed {
            reason: "empty response".to_string(),
        });
        assert_eq!(
            report.text(),
            "### Final Diagnosis:\n\nFailed to generate a comprehensive diagnosis due to an internal error."
        );
    }
}
