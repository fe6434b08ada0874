//! Error handling for MaqServiceBot
//!
//! This module defines the main error type used throughout the application.
//! The funnel itself never fails; errors come from configuration, logging
//! setup and the chat transports.

use thiserror::Error;

/// Main error type for MaqServiceBot
#[derive(Error, Debug)]
pub enum MaqServiceError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Transport error ({transport}): {message}")]
    Transport { transport: String, message: String },

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for MaqServiceBot operations
pub type Result<T> = std::result::Result<T, MaqServiceError>;

impl MaqServiceError {
    /// Build a transport error tagged with the transport name
    pub fn transport(transport: &str, message: impl Into<String>) -> Self {
        MaqServiceError::Transport {
            transport: transport.to_string(),
            message: message.into(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MaqServiceError::Telegram(_) => true,
            MaqServiceError::Config(_) => false,
            MaqServiceError::ConfigLoad(_) => false,
            MaqServiceError::Transport { .. } => true,
            MaqServiceError::InvalidRecipient(_) => false,
            MaqServiceError::Io(_) => true,
            MaqServiceError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MaqServiceError::Config(_) => ErrorSeverity::Critical,
            MaqServiceError::ConfigLoad(_) => ErrorSeverity::Critical,
            MaqServiceError::UrlParse(_) => ErrorSeverity::Critical,
            MaqServiceError::Telegram(_) => ErrorSeverity::Warning,
            MaqServiceError::Transport { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_recoverable_warnings() {
        let err = MaqServiceError::transport("console", "stdout closed");
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.to_string(), "Transport error (console): stdout closed");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = MaqServiceError::Config("Bot token is required".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }

    #[test]
    fn test_bad_recipient_is_a_plain_error() {
        let err = MaqServiceError::InvalidRecipient("not-a-chat".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.to_string(), "Invalid recipient: not-a-chat");
    }
}
