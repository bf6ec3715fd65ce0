//! Configuration file loading for specialist-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PANEL_`-prefixed environment variables (`PANEL_BEHAVIOR__TIMEOUT_SECONDS=30`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/specialist-panel/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_BASE, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
    FileBehaviorConfig, FileConfig, FileModelsConfig, FileOutputConfig, FilePanelConfig,
};
pub use loader::ConfigLoader;
