//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::discord::DISCORD_API_BASE;

pub(crate) const APP_NAME: &str = "guildnav";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Discord API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Selection persistence configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Discord API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Selection persistence configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File remembering the last channel of every guild.
    /// Selections are kept in memory only when no path can be determined.
    #[serde(default)]
    pub state_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DISCORD_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

use super::args::CliArgs;
use super::storage::StorageManager;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_base) = &args.api_base {
            self.api.base_url.clone_from(api_base);
        }
        if let Some(state_path) = &args.state_path {
            self.storage.state_path = Some(state_path.clone());
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("guildnav.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective selection file path, falling back to the
    /// storage manager's data directory.
    #[must_use]
    pub fn effective_state_path(&self, storage: Option<&StorageManager>) -> Option<PathBuf> {
        self.storage
            .state_path
            .clone()
            .or_else(|| storage.map(StorageManager::default_state_path))
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "http://localhost:3000/api"

            [storage]
            state_path = "/tmp/guildnav/selection.toml"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.effective_state_path(None),
            Some(PathBuf::from("/tmp/guildnav/selection.toml"))
        );
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api.base_url, DISCORD_API_BASE);
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(30));
        assert!(config.storage.state_path.is_none());
        assert_eq!(config.effective_state_path(None), None);
    }

    #[test]
    fn test_state_path_falls_back_to_storage_dir() {
        let config = AppConfig::default();
        let storage = StorageManager::with_dir(PathBuf::from("/tmp/guildnav-test"));

        assert_eq!(
            config.effective_state_path(Some(&storage)),
            Some(PathBuf::from("/tmp/guildnav-test/selection.toml"))
        );
    }

    #[test]
    fn test_args_override_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "guildnav",
            "--guild",
            "1",
            "--log-level",
            "warn",
            "--api-base",
            "http://127.0.0.1:1",
            "--state-path",
            "/tmp/sel.toml",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.api.base_url, "http://127.0.0.1:1");
        assert_eq!(
            config.storage.state_path,
            Some(PathBuf::from("/tmp/sel.toml"))
        );
    }
}
