//! Error handling for Care Network
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy. Missing translations
//! are deliberately not represented here: they degrade to the lookup key.

use thiserror::Error;

/// Main error type for the Care Network localization core
#[derive(Error, Debug)]
pub enum CareNetworkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid translations for {language}: {reason}")]
    InvalidTranslations { language: String, reason: String },

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Care Network operations
pub type Result<T> = std::result::Result<T, CareNetworkError>;

impl CareNetworkError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CareNetworkError::Config(_) => false,
            CareNetworkError::ConfigLoad(_) => false,
            CareNetworkError::UnsupportedLanguage(_) => true,
            CareNetworkError::InvalidTranslations { .. } => true,
            CareNetworkError::Storage(_) => true,
            CareNetworkError::Serialization(_) => true,
            CareNetworkError::Io(_) => true,
            CareNetworkError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CareNetworkError::Config(_) => ErrorSeverity::Critical,
            CareNetworkError::ConfigLoad(_) => ErrorSeverity::Critical,
            CareNetworkError::Storage(_) => ErrorSeverity::Warning,
            CareNetworkError::UnsupportedLanguage(_) => ErrorSeverity::Info,
            CareNetworkError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
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
    fn test_config_errors_are_fatal() {
        let err = CareNetworkError::Config("bad default".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_unsupported_language_is_recoverable() {
        let err = CareNetworkError::UnsupportedLanguage("fr".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.to_string(), "Unsupported language: fr");
    }

    #[test]
    fn test_invalid_translations_message() {
        let err = CareNetworkError::InvalidTranslations {
            language: "he".to_string(),
            reason: "expected an object".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid translations for he: expected an object");
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
