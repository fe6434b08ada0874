//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub transport: TransportConfig,
    pub bot: BotConfig,
    pub console: ConsoleConfig,
    pub funnel: FunnelConfig,
    pub pacing: PacingConfig,
    pub logging: LoggingConfig,
}

/// Which chat transport the process binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Telegram,
    Console,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportConfig {
    pub kind: TransportKind,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
    /// Overrides the Bot API base URL (local Bot API server, tests)
    pub api_url: Option<String>,
}

/// Identity used for messages typed on the console transport
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub user_id: String,
    pub display_name: String,
}

/// Funnel session lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FunnelConfig {
    /// Mid-funnel sessions untouched for this long are evicted; 0 disables eviction
    pub idle_timeout_seconds: u64,
    pub cleanup_interval_seconds: u64,
}

/// Simulated typing pauses before certain replies, in milliseconds
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    pub reset_ms: u64,
    pub greeting_ms: u64,
    pub info_ms: u64,
    pub summary_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from a specific configuration file (extension optional)
    /// layered under the `MAQSERVICE_` environment
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MAQSERVICE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MaqServiceError> {
        super::validation::validate_settings(self)
    }
}

impl FunnelConfig {
    /// Idle timeout, `None` when eviction is disabled
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_seconds > 0).then(|| Duration::from_secs(self.idle_timeout_seconds))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_seconds)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            user_id: "console".to_string(),
            display_name: "Cliente".to_string(),
        }
    }
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            idle_timeout_seconds: 1800,
            cleanup_interval_seconds: 60,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            reset_ms: 1000,
            greeting_ms: 1500,
            info_ms: 1500,
            summary_ms: 2000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}
