//! Report sink port
//!
//! Where the final report lands. The infrastructure adapter writes a file;
//! tests use an in-memory sink.

use async_trait::async_trait;
use panel_domain::FinalReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Human-readable destination, used in logs and the console summary
    fn destination(&self) -> String;

    /// Persist the whole report in one write.
    async fn write(&self, report: &FinalReport) -> Result<(), PublishError>;
}
