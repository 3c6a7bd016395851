//! Configuration management.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for causeway.
#[derive(Debug, Clone)]
pub struct CausewayConfig {
    /// Directory holding the JSON store's record files.
    pub data_dir: PathBuf,
    /// GitHub API configuration.
    pub github: GithubConfig,
}

/// GitHub API configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API endpoint (overridable for enterprise hosts).
    pub endpoint: String,
    /// API token (also picked up from `GITHUB_TOKEN`).
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::github::HttpGithubClient::DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

impl Default for CausewayConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            github: GithubConfig::default(),
        }
    }
}

impl CausewayConfig {
    /// Loads configuration from the default config file and environment.
    ///
    /// Resolution order, later wins: built-in defaults, the TOML file at
    /// the platform config dir (`causeway.toml`), environment variables
    /// (`CAUSEWAY_DATA_DIR`, `GITHUB_API_URL`, `GITHUB_TOKEN`). A `.env`
    /// file is honored if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        let file: ConfigFile = toml::from_str(&data).map_err(|e| Error::OperationFailed {
            operation: "parse_config".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Ok(Self::from(file))
    }

    /// Applies environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var("CAUSEWAY_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(endpoint) = std::env::var("GITHUB_API_URL") {
            self.github.endpoint = endpoint;
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            self.github.token = Some(token);
        }
    }
}

impl From<ConfigFile> for CausewayConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let github = file.github.unwrap_or_default();
        Self {
            data_dir: file.data_dir.map_or(defaults.data_dir, PathBuf::from),
            github: GithubConfig {
                endpoint: github.endpoint.unwrap_or(defaults.github.endpoint),
                token: github.token,
            },
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// GitHub section.
    pub github: Option<ConfigFileGithub>,
}

/// GitHub section of the configuration file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileGithub {
    /// API endpoint.
    pub endpoint: Option<String>,
    /// API token.
    pub token: Option<String>,
}

/// Platform data directory, falling back to a relative path.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("io", "causeway", "causeway").map_or_else(
        || PathBuf::from(".causeway"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Platform config file path.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "causeway", "causeway")
        .map(|dirs| dirs.config_dir().join("causeway.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CausewayConfig::default();
        assert_eq!(config.github.endpoint, "https://api.github.com");
        assert!(config.github.token.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("causeway.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/causeway\"\n\n[github]\nendpoint = \"https://github.example/api/v3\"\n",
        )
        .unwrap();

        let config = CausewayConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/causeway"));
        assert_eq!(config.github.endpoint, "https://github.example/api/v3");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("causeway.toml");
        std::fs::write(&path, "data_dir = [").unwrap();
        assert!(CausewayConfig::from_file(&path).is_err());
    }
}
