//! Provider credentials, resolved once at startup
//!
//! The API key is looked up in the process environment first and then in a
//! `.env` file. The `.env` file is parsed without exporting anything, so the
//! process environment is never modified.

use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Competing key that must never be picked up as a fallback
const COMPETING_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{var} not found in the environment or .env file")]
    Missing { var: &'static str },
}

/// Where the credential was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    DotenvFile,
}

/// Immutable credential handed to the gateway adapter
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialConfig {
    api_key: String,
    source: CredentialSource,
}

impl CredentialConfig {
    /// Resolve from the environment and a specific `.env` file.
    pub fn resolve_with_file(path: &Path) -> Result<Self, CredentialError> {
        let dotenv_entries = read_dotenv_file(path);
        Self::resolve_from(|var| std::env::var(var).ok(), &dotenv_entries)
    }

    /// Resolution rule with injectable sources. Blank values count as absent.
    pub fn resolve_from(
        env: impl Fn(&str) -> Option<String>,
        dotenv_entries: &[(String, String)],
    ) -> Result<Self, CredentialError> {
        if env(COMPETING_KEY_VAR).is_some() {
            debug!("{} is set and will be ignored", COMPETING_KEY_VAR);
        }

        if let Some(key) = env(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            return Ok(Self {
                api_key: key,
                source: CredentialSource::Environment,
            });
        }

        dotenv_entries
            .iter()
            .rev()
            .find(|(name, value)| name == API_KEY_VAR && !value.trim().is_empty())
            .map(|(_, value)| Self {
                api_key: value.clone(),
                source: CredentialSource::DotenvFile,
            })
            .ok_or(CredentialError::Missing { var: API_KEY_VAR })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// First few characters, for diagnostics
    pub fn redacted(&self) -> String {
        let prefix: String = self.api_key.chars().take(5).collect();
        format!("{}...", prefix)
    }
}

/// Parse a `.env` file without exporting anything into the process environment.
///
/// A missing or unreadable file yields no entries.
fn read_dotenv_file(path: &Path) -> Vec<(String, String)> {
    // Deprecated in 0.15; `from_path` would export into the environment instead.
    #[allow(deprecated)]
    let entries = dotenv::from_path_iter(path);
    match entries {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("api_key", &self.redacted())
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_environment_wins_over_dotenv() {
        let dotenv = vec![(API_KEY_VAR.to_string(), "gsk_file".to_string())];
        let creds = CredentialConfig::resolve_from(env_of(&[(API_KEY_VAR, "gsk_env")]), &dotenv)
            .unwrap();
        assert_eq!(creds.api_key(), "gsk_env");
        assert_eq!(creds.source(), CredentialSource::Environment);
    }

    #[test]
    fn test_falls_back_to_dotenv() {
        let dotenv = vec![(API_KEY_VAR.to_string(), "gsk_file".to_string())];
        let creds = CredentialConfig::resolve_from(env_of(&[]), &dotenv).unwrap();
        assert_eq!(creds.api_key(), "gsk_file");
        assert_eq!(creds.source(), CredentialSource::DotenvFile);
    }

    #[test]
    fn test_missing_key_is_error() {
        let err = CredentialConfig::resolve_from(env_of(&[(API_KEY_VAR, "  ")]), &[]).unwrap_err();
        assert_eq!(err, CredentialError::Missing { var: API_KEY_VAR });
        assert_eq!(
            err.to_string(),
            "GROQ_API_KEY not found in the environment or .env file"
        );
    }

    #[test]
    fn test_competing_key_is_never_used() {
        let err = CredentialConfig::resolve_from(env_of(&[("OPENAI_API_KEY", "sk-123")]), &[])
            .unwrap_err();
        assert_eq!(err, CredentialError::Missing { var: API_KEY_VAR });
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let creds =
            CredentialConfig::resolve_from(env_of(&[(API_KEY_VAR, "gsk_supersecret")]), &[])
                .unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("gsk_s..."));
        assert!(!debug.contains("supersecret"));
    }

    #[test]
    fn test_dotenv_file_entries_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "GROQ_API_KEY=\"gsk_from_file\"\n").unwrap();

        let dotenv = read_dotenv_file(&path);
        let creds = CredentialConfig::resolve_from(env_of(&[]), &dotenv).unwrap();
        assert_eq!(creds.api_key(), "gsk_from_file");
    }

    #[test]
    fn test_missing_dotenv_file_yields_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_dotenv_file(&dir.path().join("absent.env")).is_empty());
    }
}
