//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Atlas session credential
    #[serde(default)]
    pub session: SessionConfig,

    /// Inclusive range of Atlas level ids to process
    pub range: RangeConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::config(format!(
                "cannot read config file {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.range.start > self.range.end {
            return Err(AppError::validation(format!(
                "range.start ({}) must not exceed range.end ({})",
                self.range.start, self.range.end
            )));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.output.json_file.as_os_str().is_empty() {
            return Err(AppError::validation("output.json_file is empty"));
        }
        if self.output.csv_file.as_os_str().is_empty() {
            return Err(AppError::validation("output.csv_file is empty"));
        }
        Ok(())
    }

    /// The configured session cookie, with an empty value meaning none.
    pub fn session_credential(&self) -> Option<String> {
        let value = self.session.phpsessid.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Atlas session credential settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// PHPSESSID cookie value; empty runs the scrape anonymously
    #[serde(default)]
    pub phpsessid: String,
}

/// Inclusive level id range to scrape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: u32,
    pub end: u32,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Structured dataset, one object per level keyed by id
    #[serde(default = "defaults::json_file")]
    pub json_file: PathBuf,

    /// Flat values-only table, one row per level
    #[serde(default = "defaults::csv_file")]
    pub csv_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_file: defaults::json_file(),
            csv_file: defaults::csv_file(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; atlas-stats/0.1)".to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn json_file() -> PathBuf {
        PathBuf::from("atlas_data.json")
    }

    pub fn csv_file() -> PathBuf {
        PathBuf::from("atlas_data.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = toml::from_str(
            r#"
            [range]
            start = 100
            end = 200
            "#,
        )
        .unwrap();

        assert!(config.session_credential().is_none());
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.output.json_file, PathBuf::from("atlas_data.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_range_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[session]\nphpsessid = \"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_inverted_range_fails_validation() {
        let config: Config = toml::from_str(
            r#"
            [range]
            start = 200
            end = 100
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_cookie_is_anonymous() {
        let config: Config = toml::from_str(
            r#"
            [session]
            phpsessid = "   "

            [range]
            start = 1
            end = 1
            "#,
        )
        .unwrap();
        assert!(config.session_credential().is_none());
    }

    #[test]
    fn test_configured_cookie_is_kept() {
        let config: Config = toml::from_str(
            r#"
            [session]
            phpsessid = "abc123"

            [range]
            start = 1
            end = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.session_credential().as_deref(), Some("abc123"));
    }
}
