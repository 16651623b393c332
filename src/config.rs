//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "applicant_tui=info";

/// Log file written inside `AppConfig::data_dir()`
pub const LOG_FILE_NAME: &str = "applicant-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Play the fade-in animation on startup
    pub fade_in: Option<bool>,
    /// Fade-in duration in milliseconds
    pub fade_in_ms: Option<u64>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "applicant", "applicant-tui")
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn fade_in_enabled(&self) -> bool {
        self.fade_in.unwrap_or(true)
    }

    pub fn fade_in_duration(&self) -> Duration {
        self.fade_in_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::state::FadeState::DEFAULT_DURATION)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.fade_in.is_none());
        assert!(config.fade_in_ms.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.fade_in_enabled());
        assert_eq!(config.fade_in_duration(), Duration::from_millis(600));
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            fade_in: Some(false),
            fade_in_ms: Some(250),
            log_filter: Some("applicant_tui=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.fade_in, Some(false));
        assert_eq!(parsed.fade_in_ms, Some(250));
        assert!(!parsed.fade_in_enabled());
        assert_eq!(parsed.fade_in_duration(), Duration::from_millis(250));
        assert_eq!(parsed.log_filter(), "applicant_tui=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.fade_in.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"fade_in": false, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.fade_in, Some(false));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.fade_in.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"fade_in": false, "fade_in_ms": 120}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.fade_in_enabled());
        assert_eq!(config.fade_in_duration(), Duration::from_millis(120));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
