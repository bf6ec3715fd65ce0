//! File-backed report sink

use async_trait::async_trait;
use panel_application::ports::report_sink::{PublishError, ReportSink};
use panel_domain::FinalReport;
use std::path::{Path, PathBuf};

/// Writes the final report to a fixed path, creating parent directories.
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    async fn write(&self, report: &FinalReport) -> Result<(), PublishError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PublishError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, report.text())
            .await
            .map_err(|source| PublishError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
