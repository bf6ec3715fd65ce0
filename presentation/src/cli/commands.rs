//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the terminal echo of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-specialist status, gate decision and output path
    Summary,
    /// Only the final report text
    Report,
    /// JSON output
    Json,
}

impl From<OutputFormat> for panel_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => panel_domain::OutputFormat::Summary,
            OutputFormat::Report => panel_domain::OutputFormat::Report,
            OutputFormat::Json => panel_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for specialist-panel
#[derive(Parser, Debug)]
#[command(name = "specialist-panel")]
#[command(author, version, about = "Specialist panel - parallel opinions, one final diagnosis")]
#[command(long_about = r#"
Specialist Panel sends one medical report to several specialist agents at once
and combines their opinions into a single final diagnosis.

The run has two phases:
1. Consultation: every specialist reads the document in parallel
2. Synthesis: a multidisciplinary team combines all opinions

A specialist that fails is replaced by a placeholder. If a required report is
missing, synthesis is skipped and a failure notice is written instead.

Requires GROQ_API_KEY in the environment or in a .env file.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config
3. ~/.config/specialist-panel/config.toml   Global config

Example:
  specialist-panel
  specialist-panel --input reports/patient.txt --output out/diagnosis.txt
  specialist-panel -s Cardiologist -s Neurologist --strict-gate
"#)]
pub struct Cli {
    /// Input document read by every specialist
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Destination of the final report
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Specialists on the panel (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub specialist: Vec<String>,

    /// Specialists whose reports must be present before synthesis
    #[arg(long, value_name = "NAME")]
    pub require: Vec<String>,

    /// Model used by every specialist
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model used for the team synthesis
    #[arg(long, value_name = "MODEL")]
    pub synthesis_model: Option<String>,

    /// Deadline in seconds for each model call
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Maximum specialists consulted at the same time
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Treat placeholder reports as missing when gating synthesis
    #[arg(long)]
    pub strict_gate: bool,

    /// Exit with status 2 when no diagnosis was produced
    #[arg(long)]
    pub strict_exit: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Dotenv file consulted for GROQ_API_KEY
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
