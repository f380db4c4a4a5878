//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides on native
//! targets; the browser build uses the defaults.

use serde::Deserialize;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the activities API lives
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Empty means same origin
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Board behaviour: timings and the accepted email domain
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Quiet period before a search reload
    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u64,

    /// How long the participants panel stays up
    #[serde(default = "default_participants_display")]
    pub participants_display_secs: u64,

    /// How long signup and validation messages stay up
    #[serde(default = "default_message_display")]
    pub message_display_secs: u64,

    /// Signups must use an address ending in `@<email_domain>`
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
}

fn default_search_debounce() -> u64 {
    300
}

fn default_participants_display() -> u64 {
    10
}

fn default_message_display() -> u64 {
    5
}

fn default_email_domain() -> String {
    "mergington.edu".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce(),
            participants_display_secs: default_participants_display(),
            message_display_secs: default_message_display(),
            email_domain: default_email_domain(),
        }
    }
}

impl UiConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn participants_display(&self) -> Duration {
        Duration::from_secs(self.participants_display_secs)
    }

    pub fn message_display(&self) -> Duration {
        Duration::from_secs(self.message_display_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("activity-board").join("config.toml")),
            Some(PathBuf::from("/etc/activity-board/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First existing file among `paths`
    pub fn find_file(paths: &[PathBuf]) -> Option<PathBuf> {
        paths.iter().find(|p| p.exists()).cloned()
    }

    /// Load from default locations or environment.
    ///
    /// An unreadable file falls back to defaults with a warning; callers that
    /// want the error use [`Config::find_file`] and [`Config::load_with_env`].
    pub fn load_default() -> Self {
        if let Some(path) = Self::find_file(&Self::default_paths()) {
            match Self::load_with_env(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ACTIVITY_BOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(domain) = std::env::var("ACTIVITY_BOARD_EMAIL_DOMAIN") {
            self.ui.email_domain = domain;
        }
        if let Ok(level) = std::env::var("ACTIVITY_BOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ACTIVITY_BOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity Board Configuration
#
# Environment variables override these settings:
# - ACTIVITY_BOARD_API_URL
# - ACTIVITY_BOARD_EMAIL_DOMAIN
# - ACTIVITY_BOARD_LOG_LEVEL
# - ACTIVITY_BOARD_LOG_FORMAT

[api]
# Activities API server
base_url = "http://localhost:8000"

[ui]
# Quiet period after the last keystroke before searching (ms)
search_debounce_ms = 300

# How long the participants panel stays visible (seconds)
participants_display_secs = 10

# How long signup messages stay visible (seconds)
message_display_secs = 5

# Signups must use an address in this domain
email_domain = "mergington.edu"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.ui.participants_display(), Duration::from_secs(10));
        assert_eq!(config.ui.message_display(), Duration::from_secs(5));
        assert_eq!(config.ui.email_domain, "mergington.edu");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nemail_domain = \"example.org\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.email_domain, "example.org");
        assert_eq!(config.ui.search_debounce_ms, 300);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\nbroken").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_find_file_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let second = dir.path().join("second.toml");
        let third = dir.path().join("third.toml");
        std::fs::write(&second, "").unwrap();
        std::fs::write(&third, "").unwrap();

        let found = Config::find_file(&[missing.clone(), second.clone(), third]);
        assert_eq!(found, Some(second));
        assert_eq!(Config::find_file(&[missing]), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/activity-board.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
