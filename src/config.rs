//! Application configuration.
//!
//! Configuration is stored as YAML in the platform config directory (or the
//! file given with `--config` / `SLABOARD_CONFIG`) and includes:
//! - The backend base URL
//! - How stale table responses are handled
//! - The status filter set and chat priming
//! - Log level and TUI log file

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlaError};
use crate::types::DEFAULT_FILTERS;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Environment variable overriding `api_url`
pub const API_URL_ENV: &str = "SLABOARD_API_URL";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 7] = [
    "api_url",
    "stale_responses",
    "filters",
    "chat.enabled",
    "chat.prime_message",
    "log.level",
    "log.file",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// What to do with a ticket response that is no longer the newest request
    #[serde(default)]
    pub stale_responses: StaleResponsePolicy,

    /// Status filter values, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "ChatConfig::is_default")]
    pub chat: ChatConfig,

    #[serde(default, skip_serializing_if = "LogConfig::is_default")]
    pub log: LogConfig,
}

/// Handling of ticket responses that complete out of order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponsePolicy {
    /// Every response is applied when it arrives; the last to complete wins
    #[default]
    Apply,
    /// Responses to anything but the newest request are dropped
    Discard,
}

impl fmt::Display for StaleResponsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleResponsePolicy::Apply => write!(f, "apply"),
            StaleResponsePolicy::Discard => write!(f, "discard"),
        }
    }
}

impl FromStr for StaleResponsePolicy {
    type Err = SlaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "apply" => Ok(StaleResponsePolicy::Apply),
            "discard" => Ok(StaleResponsePolicy::Discard),
            _ => Err(SlaError::Config(format!(
                "unknown stale_responses policy '{}', expected 'apply' or 'discard'",
                s
            ))),
        }
    }
}

/// Chat pane configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Whether the startup priming message is sent (default: true)
    #[serde(default = "default_chat_enabled")]
    pub enabled: bool,

    /// Message sent once at startup (default: "menu")
    #[serde(default = "default_prime_message")]
    pub prime_message: String,
}

fn default_chat_enabled() -> bool {
    true
}

fn default_prime_message() -> String {
    crate::dashboard::chat::PRIME_MESSAGE.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: default_chat_enabled(),
            prime_message: default_prime_message(),
        }
    }
}

impl ChatConfig {
    pub fn is_default(&self) -> bool {
        self.enabled == default_chat_enabled() && self.prime_message == default_prime_message()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `slaboard=debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log file used while the dashboard is on screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn is_default(&self) -> bool {
        self == &LogConfig::default()
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "slaboard", "slaboard")
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("slaboard.yaml"))
    }

    /// Default location of the TUI log file
    pub fn default_log_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.data_local_dir().join("slaboard.log"))
            .unwrap_or_else(|| PathBuf::from("slaboard.log"))
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SlaError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                SlaError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Backend base URL from environment, config file, or the default
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Status filter values, falling back to the default set
    pub fn filters(&self) -> Vec<String> {
        match &self.filters {
            Some(filters) if !filters.is_empty() => filters.clone(),
            _ => DEFAULT_FILTERS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Message to send at startup, if priming is enabled
    pub fn prime_message(&self) -> Option<&str> {
        let message = self.chat.prime_message.trim();
        (self.chat.enabled && !message.is_empty()).then_some(message)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }

    /// Read a value by key as display text; `None` when unset
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "api_url" => Some(self.api_url()),
            "stale_responses" => Some(self.stale_responses.to_string()),
            "filters" => Some(self.filters().join(",")),
            "chat.enabled" => Some(self.chat.enabled.to_string()),
            "chat.prime_message" => Some(self.chat.prime_message.clone()),
            "log.level" => self.log.level.clone(),
            "log.file" => Some(self.log_file().display().to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a value by key from its text form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                crate::api::HttpBackend::new(value)?;
                self.api_url = Some(value.trim().to_string());
            }
            "stale_responses" => self.stale_responses = value.parse()?,
            "filters" => {
                let filters: Vec<String> = value
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect();
                if filters.is_empty() {
                    return Err(SlaError::Config(
                        "filters cannot be empty".to_string(),
                    ));
                }
                self.filters = Some(filters);
            }
            "chat.enabled" => {
                self.chat.enabled = value.trim().parse::<bool>().map_err(|_| {
                    SlaError::Config(format!(
                        "invalid value '{value}' for chat.enabled. Expected: true or false"
                    ))
                })?;
            }
            "chat.prime_message" => self.chat.prime_message = value.trim().to_string(),
            "log.level" => {
                tracing_subscriber::EnvFilter::try_new(value).map_err(|e| {
                    SlaError::Config(format!("invalid log.level '{value}': {e}"))
                })?;
                self.log.level = Some(value.trim().to_string());
            }
            "log.file" => self.log.file = Some(PathBuf::from(value.trim())),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> SlaError {
    SlaError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
