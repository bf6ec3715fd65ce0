//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use panel_domain::{GatePolicy, Model, OutputFormat, Specialist};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Default location of the shared input document
pub const DEFAULT_INPUT_PATH: &str = "medical_report.txt";

/// Default location of the final report
pub const DEFAULT_OUTPUT_PATH: &str = "results/final_diagnosis.txt";

/// OpenAI-compatible endpoint of the default provider
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("max_concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("at least one specialist must be configured")]
    NoSpecialists,

    #[error("specialist name cannot be empty")]
    EmptySpecialistName,

    #[error("specialist '{0}' is listed more than once")]
    DuplicateSpecialist(String),

    #[error("required specialist '{0}' is not in the specialist list")]
    UnknownRequired(String),

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Raw panel configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Specialist names, one task each
    pub specialists: Vec<String>,
    /// Names that must be present before synthesis (empty = all specialists)
    pub required: Vec<String>,
    /// Input document path
    pub input: String,
    /// Final report path
    pub output: String,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            specialists: Specialist::default_roster()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            required: Vec::new(),
            input: DEFAULT_INPUT_PATH.to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Raw model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used by every specialist
    pub specialist: Model,
    /// Model used for the team synthesis
    pub synthesis: Model,
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            specialist: Model::default(),
            synthesis: Model::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            temperature: 0.0,
        }
    }
}

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Deadline in seconds for each specialist call and for synthesis
    pub timeout_seconds: Option<u64>,
    /// Maximum specialists in flight at once (unset = unbounded)
    pub max_concurrency: Option<usize>,
    /// Whether placeholder results may pass the synthesis gate
    pub gate_policy: GatePolicy,
    /// Exit with a non-zero status when no diagnosis was produced
    pub strict_exit: bool,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(120),
            max_concurrency: None,
            gate_policy: GatePolicy::default(),
            strict_exit: false,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub panel: FilePanelConfig,
    pub models: FileModelsConfig,
    pub behavior: FileBehaviorConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.behavior.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if let Some(0) = self.behavior.max_concurrency {
            return Err(ConfigValidationError::InvalidConcurrency);
        }

        if self.panel.specialists.is_empty() {
            return Err(ConfigValidationError::NoSpecialists);
        }
        let mut seen = HashSet::new();
        for name in &self.panel.specialists {
            if name.trim().is_empty() {
                return Err(ConfigValidationError::EmptySpecialistName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigValidationError::DuplicateSpecialist(name.clone()));
            }
        }
        for name in &self.panel.required {
            if !seen.contains(name.as_str()) {
                return Err(ConfigValidationError::UnknownRequired(name.clone()));
            }
        }

        for model in [&self.models.specialist, &self.models.synthesis] {
            if model.as_str().trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
        }

        Ok(())
    }
}
