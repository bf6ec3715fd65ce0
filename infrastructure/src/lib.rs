//! Infrastructure layer for specialist-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod groq;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileModelsConfig,
    FileOutputConfig, FilePanelConfig,
};
pub use credentials::{API_KEY_VAR, CredentialConfig, CredentialError, CredentialSource};
pub use groq::{gateway::GroqLlmGateway, session::GroqSession};
pub use storage::{DocumentError, FileReportSink, read_document};
