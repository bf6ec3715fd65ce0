//! Console output formatter for panel runs

use colored::Colorize;
use panel_application::PanelRunOutput;
use panel_domain::{OutputFormat, PanelVerdict};

/// Formats finished panel runs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a run in the requested format
    pub fn render(output: &PanelRunOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => Self::format_summary(output),
            OutputFormat::Report => Self::format_report(output),
            OutputFormat::Json => Self::format_json(output),
        }
    }

    /// Per-specialist status, gate decision and output path
    pub fn format_summary(output: &PanelRunOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Specialist Panel Results"));
        text.push('\n');

        text.push_str(&Self::section_header("Specialist Reports"));
        for name in output.results.names() {
            if output.results.is_placeholder(name) {
                text.push_str(&format!("  {} {} (placeholder)\n", "x".red(), name));
            } else {
                text.push_str(&format!("  {} {}\n", "v".green(), name));
            }
        }

        text.push_str(&Self::section_header("Final Diagnosis"));
        match &output.verdict {
            PanelVerdict::Synthesized { .. } => {
                text.push_str(&format!("{}\n", "Synthesis completed".green().bold()));
            }
            PanelVerdict::Blocked { missing } => {
                text.push_str(&format!(
                    "{} missing: {}\n",
                    "Synthesis skipped,".yellow().bold(),
                    missing.join(", ")
                ));
            }
            PanelVerdict::SynthesisFailed { reason } => {
                text.push_str(&format!(
                    "{} {}\n",
                    "Synthesis failed:".red().bold(),
                    reason
                ));
            }
        }

        text.push_str(&format!(
            "\n{} {}\n",
            "Report written to".dimmed(),
            output.destination
        ));
        text.push_str(&Self::footer());

        text
    }

    /// The final report text exactly as written to disk
    pub fn format_report(output: &PanelRunOutput) -> String {
        output.report.text().to_string()
    }

    /// Format as JSON
    pub fn format_json(output: &PanelRunOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{FinalReport, ResultSet};

    fn output(verdict: PanelVerdict) -> PanelRunOutput {
        let mut results = ResultSet::new();
        results.insert_opinion("Cardiologist", "Heart looks fine");
        results.insert_placeholder("Psychologist");
        PanelRunOutput {
            results,
            report: FinalReport::from(&verdict),
            verdict,
            destination: "results/final_diagnosis.txt".to_string(),
        }
    }

    #[test]
    fn test_summary_lists_specialists_and_destination() {
        let text = ConsoleFormatter::format_summary(&output(PanelVerdict::Synthesized {
            text: "Y".to_string(),
        }));
        assert!(text.contains("Cardiologist"));
        assert!(text.contains("Psychologist (placeholder)"));
        assert!(text.contains("Synthesis completed"));
        assert!(text.contains("results/final_diagnosis.txt"));
    }

    #[test]
    fn test_summary_names_missing_reports() {
        let text = ConsoleFormatter::format_summary(&output(PanelVerdict::Blocked {
            missing: vec!["Pulmonologist".to_string()],
        }));
        assert!(text.contains("missing: Pulmonologist"));
    }

    #[test]
    fn test_report_format_is_file_text() {
        let run = output(PanelVerdict::Synthesized {
            text: "Y".to_string(),
        });
        assert_eq!(
            ConsoleFormatter::render(&run, OutputFormat::Report),
            "### Final Diagnosis:\n\nY"
        );
    }

    #[test]
    fn test_json_contains_verdict_kind() {
        let run = output(PanelVerdict::SynthesisFailed {
            reason: "Timeout".to_string(),
        });
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&run)).unwrap();
        assert_eq!(json["verdict"]["kind"], "synthesis_failed");
        assert_eq!(json["destination"], "results/final_diagnosis.txt");
    }
}
