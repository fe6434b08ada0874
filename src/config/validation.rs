//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{MaqServiceError, Result};
use super::{Settings, TransportKind};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.transport.kind == TransportKind::Telegram {
        validate_bot_config(&settings.bot)?;
    }
    validate_console_config(&settings.console)?;
    validate_funnel_config(&settings.funnel)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(MaqServiceError::Config(
            "Bot token is required".to_string()
        ));
    }

    if let Some(ref api_url) = config.api_url {
        url::Url::parse(api_url)?;
    }

    Ok(())
}

/// Validate console identity
fn validate_console_config(config: &super::ConsoleConfig) -> Result<()> {
    if config.user_id.trim().is_empty() {
        return Err(MaqServiceError::Config(
            "Console user id is required".to_string()
        ));
    }

    Ok(())
}

/// Validate funnel session lifecycle
fn validate_funnel_config(config: &super::FunnelConfig) -> Result<()> {
    if config.idle_timeout_seconds > 0 && config.cleanup_interval_seconds == 0 {
        return Err(MaqServiceError::Config(
            "Cleanup interval must be greater than 0 when idle eviction is enabled".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MaqServiceError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MaqServiceError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(MaqServiceError::Config(
            format!("Invalid log format: {}. Valid formats: {:?}", config.format, valid_formats)
        ));
    }

    Ok(())
}
