//! Input document loading

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read input document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the whole document once. Contents are treated as opaque text.
pub async fn read_document(path: impl AsRef<Path>) -> Result<String, DocumentError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Loaded input document {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "Patient: Michael Johnson\nSymptoms: chest pain").unwrap();

        let text = read_document(&path).await.unwrap();
        assert_eq!(text, "Patient: Michael Johnson\nSymptoms: chest pain");
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_document(&path).await.unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
